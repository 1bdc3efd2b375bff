/**
 * Authentication Handler Types
 *
 * Request and response bodies for the register and login endpoints.
 */

use serde::{Deserialize, Serialize};

/// Registration request
///
/// All three fields must be present. Their contents are not validated.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct RegisterRequest {
    /// Display name
    pub name: String,
    /// User's email address (unique, case-sensitive)
    pub email: String,
    /// User's password (will be hashed before storage)
    pub password: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    /// User's password (will be verified against stored hash)
    pub password: String,
}

/// Returned by the register handler
#[derive(Serialize, Deserialize, Debug)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
}

/// Returned by the login handler
#[derive(Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    /// JWT carrying the user's email
    pub token: String,
}
