/**
 * User Model and Database Operations
 *
 * The credential store: one row per registered user, keyed by a generated
 * UUID and unique by email (exact, case-sensitive match).
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::db::StoreError;

/// User struct representing a row of the `users` table
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID, stored as text)
    pub id: String,
    /// Display name
    pub name: String,
    /// User email address
    pub email: String,
    /// Hashed password (bcrypt)
    #[serde(skip_serializing)]
    pub password: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Access to the `users` table
#[derive(Debug, Clone)]
pub struct UserStore {
    pool: SqlitePool,
}

impl UserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new user. `password_hash` must already be hashed.
    ///
    /// # Errors
    ///
    /// A duplicate email surfaces as a [`StoreError`] for which
    /// [`StoreError::is_unique_violation`] is true.
    pub async fn create_user(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, StoreError> {
        let user = User {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            password: password_hash.to_string(),
            created_at: Utc::now(),
        };

        sqlx::query(
            r#"
            INSERT INTO users (id, name, email, password, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password)
        .bind(user.created_at)
        .execute(&self.pool)
        .await?;

        Ok(user)
    }

    /// Get user by email, or `None` if no user has it.
    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password, created_at
            FROM users
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Number of users registered under `email` (0 or 1).
    pub async fn count_by_email(&self, email: &str) -> Result<i64, StoreError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE email = ?")
            .bind(email)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
