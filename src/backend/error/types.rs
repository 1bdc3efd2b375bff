/**
 * API Error Types
 *
 * Every handler failure is an [`ApiError`]. Each variant maps to one HTTP
 * status and one fixed, client-facing message; the underlying cause is kept
 * for logging only and never leaks into the response body.
 *
 * # Status Code Mapping
 *
 * | Variant | Status | Message |
 * |---|---|---|
 * | `Auth(UserAlreadyExists)` | 400 | User already exists |
 * | `Auth(InvalidCredentials)` | 401 | Invalid email or password |
 * | `Auth(..)` other | 500 | An error occurred while processing the request |
 * | `DonationNotFound` | 500 | An error occurred while fetching donation data |
 * | `CreateDonation` | 500 | An error occurred while creating donation data |
 * | `FetchDonations` | 500 | An error occurred while fetching donation data |
 * | `InvalidBody` | 400 | the rejection text |
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::flows::AuthError;
use crate::backend::db::StoreError;

/// HTTP-facing error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Registration or login failure
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Donation id is malformed or names no stored donation. Reported to the
    /// client exactly like a failed fetch.
    #[error("donation not found")]
    DonationNotFound,

    /// Persisting a donation failed
    #[error("failed to create donation: {0}")]
    CreateDonation(#[source] StoreError),

    /// Reading donations failed
    #[error("failed to fetch donations: {0}")]
    FetchDonations(#[source] StoreError),

    /// The request body could not be decoded
    #[error("invalid request body: {0}")]
    InvalidBody(String),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Auth(AuthError::UserAlreadyExists) => StatusCode::BAD_REQUEST,
            Self::Auth(AuthError::InvalidCredentials) => StatusCode::UNAUTHORIZED,
            Self::Auth(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::DonationNotFound | Self::CreateDonation(_) | Self::FetchDonations(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Get the client-facing error message
    pub fn message(&self) -> String {
        match self {
            Self::Auth(AuthError::UserAlreadyExists) => "User already exists".to_string(),
            Self::Auth(AuthError::InvalidCredentials) => "Invalid email or password".to_string(),
            Self::Auth(_) => "An error occurred while processing the request".to_string(),
            Self::CreateDonation(_) => "An error occurred while creating donation data".to_string(),
            Self::DonationNotFound | Self::FetchDonations(_) => {
                "An error occurred while fetching donation data".to_string()
            }
            Self::InvalidBody(reason) => reason.clone(),
        }
    }
}
