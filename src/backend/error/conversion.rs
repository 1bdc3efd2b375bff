/**
 * Error Conversion
 *
 * Converts [`ApiError`] into an HTTP response so handlers can return it
 * directly.
 *
 * # Response Format
 *
 * ```json
 * { "success": false, "message": "Error message" }
 * ```
 */

use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};

use crate::backend::error::types::ApiError;

/// Body of every error response
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorEnvelope {
            success: false,
            message: self.message(),
        };

        (status, Json(body)).into_response()
    }
}
