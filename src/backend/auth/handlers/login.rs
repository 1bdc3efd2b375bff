/**
 * Login Handler
 *
 * Implements `POST /api/v1/login`.
 *
 * # Responses
 *
 * - `200 OK` - `{ "success": true, "message": "Login successful", "token": "..." }`
 * - `401 Unauthorized` - unknown email or wrong password (same body for both)
 * - `500 Internal Server Error` - lookup, verification or signing failure
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::flows::{AuthError, Authenticator};
use crate::backend::auth::handlers::types::{LoginRequest, LoginResponse};
use crate::backend::error::ApiError;
use crate::backend::extract::ApiJson;

/// Login handler
///
/// Each call is independent: there is no lockout or attempt counting.
pub async fn login(
    State(auth): State<Authenticator>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    tracing::info!("Login request for: {}", request.email);

    let token = auth.login(&request.email, &request.password).await.map_err(|e| {
        match &e {
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid credentials for: {}", request.email)
            }
            other => tracing::error!("Login failed: {:?}", other),
        }
        ApiError::from(e)
    })?;

    tracing::info!("User logged in successfully: {}", request.email);

    Ok(Json(LoginResponse {
        success: true,
        message: "Login successful".to_string(),
        token,
    }))
}
