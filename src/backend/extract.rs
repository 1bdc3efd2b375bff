//! JSON body extractor.
//!
//! `axum::Json` rejects bad bodies with a plain-text response. [`ApiJson`]
//! wraps it so that malformed JSON, a missing `Content-Type` or missing
//! fields come back in the same `{ "success": false, "message": ... }`
//! envelope as every other error.

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;

use crate::backend::error::ApiError;

#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::warn!("Rejected request body: {}", rejection.body_text());
                Err(ApiError::InvalidBody(rejection.body_text()))
            }
        }
    }
}
