/**
 * Donation Store
 *
 * Schema-free donation documents in the `donations` table. A document is any
 * JSON object; it is stored verbatim and read back with an `_id` field
 * holding its generated [`DonationId`].
 *
 * Listing returns documents in storage (insertion) order. There is no update
 * or delete.
 */

use std::fmt;
use std::str::FromStr;

use chrono::Utc;
use serde_json::{Map, Value};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::db::StoreError;

/// A donation payload: any JSON object
pub type Document = Map<String, Value>;

/// Field added to documents on read
pub const ID_FIELD: &str = "_id";

/// Store-native donation identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DonationId(Uuid);

impl DonationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DonationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DonationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for DonationId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Access to the `donations` table
#[derive(Debug, Clone)]
pub struct DonationStore {
    pool: SqlitePool,
}

impl DonationStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Persist `document` and return its generated id.
    pub async fn create(&self, document: &Document) -> Result<DonationId, StoreError> {
        let id = DonationId::new();
        let json = serde_json::to_string(document)?;

        sqlx::query("INSERT INTO donations (id, document, created_at) VALUES (?, ?, ?)")
            .bind(id.to_string())
            .bind(json)
            .bind(Utc::now())
            .execute(&self.pool)
            .await?;

        Ok(id)
    }

    /// Every stored document, in storage order.
    pub async fn list(&self) -> Result<Vec<Value>, StoreError> {
        let rows: Vec<(String, String)> =
            sqlx::query_as("SELECT id, document FROM donations ORDER BY seq")
                .fetch_all(&self.pool)
                .await?;

        rows.into_iter()
            .map(|(id, document)| with_id(&id, &document))
            .collect()
    }

    /// The document stored under `id`, if any.
    pub async fn get(&self, id: DonationId) -> Result<Option<Value>, StoreError> {
        let row: Option<(String, String)> =
            sqlx::query_as("SELECT id, document FROM donations WHERE id = ?")
                .bind(id.to_string())
                .fetch_optional(&self.pool)
                .await?;

        row.map(|(id, document)| with_id(&id, &document))
            .transpose()
    }
}

fn with_id(id: &str, document: &str) -> Result<Value, StoreError> {
    let mut document: Document = serde_json::from_str(document)?;
    document.insert(ID_FIELD.to_string(), Value::String(id.to_string()));
    Ok(Value::Object(document))
}
