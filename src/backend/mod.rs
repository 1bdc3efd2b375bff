//! Backend Module
//!
//! This module contains all server-side code for Unity Aid: the Axum HTTP
//! server, its configuration, authentication and the donation store.
//!
//! # Architecture
//!
//! - **`server`** - Configuration loading, application state, app creation
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`db`** - SQLite pool, embedded migrations, store error type
//! - **`auth`** - Credential store, password hashing, JWT tokens, flows
//! - **`donations`** - Donation document store and handlers
//! - **`health`** - `GET /` status handler
//! - **`extract`** - JSON body extractor with envelope-shaped rejections
//! - **`error`** - API error taxonomy and HTTP conversion
//!
//! # Request Flow
//!
//! Every handler is a direct pass-through: decode the body, call one store
//! or flow operation, and map the result to a JSON envelope:
//!
//! ```json
//! { "success": true, "message": "...", "data": ... }
//! { "success": false, "message": "..." }
//! ```
//!
//! # State Management
//!
//! [`server::AppState`] holds the database pool, the password hasher and the
//! token issuer. It is built once in [`server::create_app`] and cloned into
//! each handler by Axum; nothing is held in global statics.

/// Server initialization, state and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Database connection and migrations
pub mod db;

/// Authentication and user management
pub mod auth;

/// Donation documents
pub mod donations;

/// Root status endpoint
pub mod health;

/// Request extractors
pub mod extract;

/// Error types
pub mod error;

pub use error::ApiError;
pub use server::{create_app, AppState, ServerConfig};
