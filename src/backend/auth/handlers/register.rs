/**
 * Register Handler
 *
 * Implements `POST /api/v1/register`.
 *
 * # Responses
 *
 * - `201 Created` - `{ "success": true, "message": "User registered successfully" }`
 * - `400 Bad Request` - email already registered, or malformed body
 * - `500 Internal Server Error` - hashing or persistence failure
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::backend::auth::flows::{AuthError, Authenticator};
use crate::backend::auth::handlers::types::{RegisterRequest, RegisterResponse};
use crate::backend::error::ApiError;
use crate::backend::extract::ApiJson;

/// Register handler
///
/// # Example Request
///
/// ```http
/// POST /api/v1/register HTTP/1.1
/// Content-Type: application/json
///
/// { "name": "Alice", "email": "alice@example.com", "password": "secret" }
/// ```
pub async fn register(
    State(auth): State<Authenticator>,
    ApiJson(request): ApiJson<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    tracing::info!("Register request for email: {}", request.email);

    match auth.register(&request.name, &request.email, &request.password).await {
        Ok(user) => {
            tracing::info!("User registered successfully: {} ({})", user.name, user.email);
            Ok((
                StatusCode::CREATED,
                Json(RegisterResponse {
                    success: true,
                    message: "User registered successfully".to_string(),
                }),
            ))
        }
        Err(AuthError::UserAlreadyExists) => {
            tracing::warn!("Email already exists: {}", request.email);
            Err(AuthError::UserAlreadyExists.into())
        }
        Err(e) => {
            tracing::error!("Failed to register user: {:?}", e);
            Err(e.into())
        }
    }
}
