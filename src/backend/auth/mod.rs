//! Authentication Module
//!
//! User registration, login and session tokens.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs        - Module exports and documentation
//! ├── users.rs      - Credential store (users table)
//! ├── password.rs   - bcrypt hashing
//! ├── sessions.rs   - JWT token issuing and verification
//! ├── flows.rs      - Registration and login orchestration
//! └── handlers/     - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: name, email, password → uniqueness check → hash → user stored
//! 2. **Login**: email, password → lookup → bcrypt verify → JWT returned
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt (cost 10 by default) before storage
//! - Tokens carry only the email and an expiry
//! - Unknown email and wrong password return the same 401 body

/// User data model and database operations
pub mod users;

/// Password hashing
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// Registration and login flows
pub mod flows;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use flows::{AuthError, Authenticator};
pub use handlers::{login, register, LoginRequest, RegisterRequest};
pub use password::PasswordHasher;
pub use sessions::{Claims, TokenIssuer};
pub use users::{User, UserStore};
