//! Authentication Handlers Module
//!
//! HTTP handlers for the authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Module exports
//! ├── types.rs     - Request and response types
//! ├── register.rs  - User registration handler
//! └── login.rs     - User authentication handler
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /api/v1/register
//! - **`login`** - POST /api/v1/login

/// Request and response types
pub mod types;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

pub use types::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};

pub use login::login;
pub use register::register;
