/**
 * Password Hashing
 *
 * Salted one-way hashing of user passwords with bcrypt. The plaintext is
 * never stored; only the bcrypt string (which embeds salt and cost) is.
 *
 * bcrypt is deliberately slow, so both operations run on Tokio's blocking
 * thread pool instead of stalling a request worker.
 */

use bcrypt::BcryptError;
use tokio::task::JoinError;

use crate::backend::server::config::DEFAULT_BCRYPT_COST;

/// Password hashing failures
#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    #[error("bcrypt error: {0}")]
    Bcrypt(#[from] BcryptError),

    #[error("hashing task failed: {0}")]
    Task(#[from] JoinError),
}

/// bcrypt hasher with a fixed work factor
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_BCRYPT_COST)
    }
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash `password` with a fresh random salt.
    pub async fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let password = password.to_owned();
        let cost = self.cost;
        let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
        Ok(hashed)
    }

    /// Check `password` against a stored bcrypt hash.
    ///
    /// A stored value that is not a valid bcrypt hash never matches.
    pub async fn verify(&self, password: &str, stored_hash: &str) -> Result<bool, PasswordError> {
        let password = password.to_owned();
        let stored_hash = stored_hash.to_owned();
        let result = tokio::task::spawn_blocking(move || bcrypt::verify(password, &stored_hash)).await?;

        match result {
            Ok(matches) => Ok(matches),
            Err(e) => {
                tracing::warn!("Stored password hash could not be parsed: {:?}", e);
                Ok(false)
            }
        }
    }
}
