//! Backend Error Module
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - ApiError and its status/message mapping
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! Handlers catch their own failures as [`ApiError`]; nothing escapes as an
//! unhandled fault. Lower layers keep their own `thiserror` enums
//! ([`crate::backend::db::StoreError`], [`crate::backend::auth::AuthError`])
//! which convert into `ApiError` at the handler boundary.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use conversion::ErrorEnvelope;
pub use types::ApiError;
