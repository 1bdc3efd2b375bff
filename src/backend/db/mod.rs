//! Database Module
//!
//! Opens the SQLite connection pool shared by every handler and applies the
//! embedded migrations from `migrations/`.
//!
//! # Collections
//!
//! - `users` - credential store, see [`crate::backend::auth::users`]
//! - `donations` - JSON documents, see [`crate::backend::donations::store`]
//!
//! # In-memory databases
//!
//! A `sqlite::memory:` URL gives every connection its own empty database, so
//! such pools are pinned to a single connection that is never recycled.

use std::str::FromStr;

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use thiserror::Error;

/// Schema migrations, embedded at compile time.
pub static MIGRATOR: Migrator = sqlx::migrate!();

/// Maximum pool size for file-backed databases.
const MAX_CONNECTIONS: u32 = 5;

/// Errors raised by the persistence layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Query or connection failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration failure at startup
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A stored document could not be (de)serialized
    #[error("document error: {0}")]
    Document(#[from] serde_json::Error),
}

impl StoreError {
    /// True when the error is a UNIQUE constraint violation.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            Self::Database(sqlx::Error::Database(db_err)) => db_err.is_unique_violation(),
            _ => false,
        }
    }
}

/// Connect to `database_url` and bring the schema up to date.
///
/// # Errors
///
/// Returns [`StoreError::Database`] if the URL is invalid or the connection
/// fails, and [`StoreError::Migration`] if a migration cannot be applied.
pub async fn connect(database_url: &str) -> Result<SqlitePool, StoreError> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool_options = if database_url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(MAX_CONNECTIONS)
    };

    tracing::info!("Connecting to database...");
    let pool = pool_options.connect_with(options).await?;
    tracing::info!("Database connection pool created successfully");

    MIGRATOR.run(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_in_memory_runs_migrations() {
        let pool = connect("sqlite::memory:").await.unwrap();

        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('users', 'donations') ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .unwrap();

        let names: Vec<&str> = tables.iter().map(|(n,)| n.as_str()).collect();
        assert_eq!(names, vec!["donations", "users"]);
    }

    #[tokio::test]
    async fn test_connect_file_database() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("test.db").display());

        let pool = connect(&url).await.unwrap();
        pool.close().await;

        // Re-opening an already migrated database is a no-op
        let pool = connect(&url).await.unwrap();
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_connect_missing_directory() {
        let result = connect("sqlite:///nonexistent-unity-aid-dir/sub/test.db").await;
        assert!(matches!(result, Err(StoreError::Database(_))));
    }
}
