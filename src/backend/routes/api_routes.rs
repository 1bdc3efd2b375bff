/**
 * API Routes
 *
 * ## Authentication
 * - `POST /api/v1/register` - User registration
 * - `POST /api/v1/login` - User login
 *
 * ## Donations
 * - `POST /api/v1/donations/create` - Create a donation
 * - `GET /api/v1/donations` - List donations
 * - `GET /api/v1/donations/{id}` - Get one donation
 *
 * All routes are public; no route checks the session token.
 */

use axum::routing::{get, post};
use axum::Router;

use crate::backend::auth::{login, register};
use crate::backend::donations::{create_donation, get_donation, list_donations};
use crate::backend::server::state::AppState;

/// Add the `/api/v1` routes to `router`.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Authentication endpoints
        .route("/api/v1/register", post(register))
        .route("/api/v1/login", post(login))
        // Donation endpoints
        .route("/api/v1/donations/create", post(create_donation))
        .route("/api/v1/donations", get(list_donations))
        .route("/api/v1/donations/{id}", get(get_donation))
}
