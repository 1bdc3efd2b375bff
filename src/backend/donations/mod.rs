//! Donations Module
//!
//! Create, list and fetch donation documents.
//!
//! ```text
//! donations/
//! ├── mod.rs       - Module exports
//! ├── store.rs     - DonationStore over the donations table
//! └── handlers.rs  - HTTP handlers
//! ```
//!
//! Update and delete are not part of the API.

/// Donation document store
pub mod store;

/// HTTP handlers for donation endpoints
pub mod handlers;

pub use handlers::{create_donation, get_donation, list_donations, DonationResponse};
pub use store::{DonationId, DonationStore, Document};
