/**
 * Donation Handlers
 *
 * - `POST /api/v1/donations/create` - store any JSON object, echo it back (201)
 * - `GET /api/v1/donations` - list every donation (200)
 * - `GET /api/v1/donations/{id}` - fetch one donation (200)
 *
 * Any persistence failure is a 500 with a fixed message. A malformed id and
 * an unknown id get the same 500 body as a failed fetch.
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::backend::donations::store::{DonationId, DonationStore};
use crate::backend::error::ApiError;
use crate::backend::extract::ApiJson;

/// Success envelope for donation endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct DonationResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

impl<T> DonationResponse<T> {
    fn new(message: &str, data: T) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            data,
        }
    }
}

/// Create a donation.
///
/// The response `data` is the submitted payload, without the generated id.
pub async fn create_donation(
    State(store): State<DonationStore>,
    ApiJson(payload): ApiJson<Value>,
) -> Result<(StatusCode, Json<DonationResponse<Value>>), ApiError> {
    let Value::Object(document) = payload else {
        tracing::warn!("Donation payload is not a JSON object");
        return Err(ApiError::InvalidBody(
            "Donation payload must be a JSON object".to_string(),
        ));
    };

    let id = store.create(&document).await.map_err(|e| {
        tracing::error!("Failed to create donation: {:?}", e);
        ApiError::CreateDonation(e)
    })?;
    tracing::info!("Donation created: {}", id);

    Ok((
        StatusCode::CREATED,
        Json(DonationResponse::new(
            "Donation data created successfully",
            Value::Object(document),
        )),
    ))
}

/// List every donation in storage order.
pub async fn list_donations(
    State(store): State<DonationStore>,
) -> Result<Json<DonationResponse<Vec<Value>>>, ApiError> {
    let donations = store.list().await.map_err(|e| {
        tracing::error!("Failed to fetch donations: {:?}", e);
        ApiError::FetchDonations(e)
    })?;
    tracing::debug!("Fetched {} donations", donations.len());

    Ok(Json(DonationResponse::new(
        "Donation data fetched successfully",
        donations,
    )))
}

/// Fetch a single donation by id.
pub async fn get_donation(
    State(store): State<DonationStore>,
    Path(id): Path<String>,
) -> Result<Json<DonationResponse<Value>>, ApiError> {
    let id: DonationId = id.parse().map_err(|e| {
        tracing::warn!("Malformed donation id {:?}: {}", id, e);
        ApiError::DonationNotFound
    })?;

    let donation = store
        .get(id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch donation {}: {:?}", id, e);
            ApiError::FetchDonations(e)
        })?
        .ok_or_else(|| {
            tracing::warn!("Donation not found: {}", id);
            ApiError::DonationNotFound
        })?;

    Ok(Json(DonationResponse::new(
        "Donation data fetched successfully",
        donation,
    )))
}
