//! Root status endpoint.

use axum::response::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ServerStatus {
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// `GET /` - reports that the process is up. Does not touch the database.
pub async fn server_status() -> Json<ServerStatus> {
    Json(ServerStatus {
        message: "Server is running smoothly".to_string(),
        timestamp: Utc::now(),
    })
}
