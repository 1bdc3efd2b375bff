/**
 * Registration and Login Flows
 *
 * # Registration
 *
 * 1. Look up an existing user by exact email; fail if one exists
 * 2. Hash the password with bcrypt
 * 3. Persist name, email and hash
 *
 * No token is issued; the caller logs in separately.
 *
 * # Login
 *
 * 1. Look up the user by exact email
 * 2. Verify the password against the stored hash
 * 3. Issue a signed token carrying the email
 *
 * An unknown email and a wrong password produce the same
 * [`AuthError::InvalidCredentials`], so callers cannot tell them apart.
 */

use thiserror::Error;

use crate::backend::auth::password::{PasswordError, PasswordHasher};
use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::auth::users::{User, UserStore};
use crate::backend::db::StoreError;

/// Authentication errors
#[derive(Debug, Error)]
pub enum AuthError {
    /// Registration attempted with an email that is already stored
    #[error("user already exists")]
    UserAlreadyExists,

    /// Unknown email or wrong password
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Password(#[from] PasswordError),

    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

/// Orchestrates the credential store, hasher and token issuer
#[derive(Debug, Clone)]
pub struct Authenticator {
    users: UserStore,
    hasher: PasswordHasher,
    tokens: TokenIssuer,
}

impl Authenticator {
    pub fn new(users: UserStore, hasher: PasswordHasher, tokens: TokenIssuer) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }

    pub fn users(&self) -> &UserStore {
        &self.users
    }

    pub fn tokens(&self) -> &TokenIssuer {
        &self.tokens
    }

    /// Register a new user.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        if self.users.get_user_by_email(email).await?.is_some() {
            return Err(AuthError::UserAlreadyExists);
        }

        let password_hash = self.hasher.hash(password).await?;

        self.users
            .create_user(name, email, &password_hash)
            .await
            .map_err(|e| {
                // Lost a race with a concurrent registration for the same email
                if e.is_unique_violation() {
                    AuthError::UserAlreadyExists
                } else {
                    AuthError::Store(e)
                }
            })
    }

    /// Verify credentials and return a fresh session token.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, AuthError> {
        let user = self
            .users
            .get_user_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !self.hasher.verify(password, &user.password).await? {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(self.tokens.create_token(&user.email)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::db;
    use crate::backend::server::config::MIN_BCRYPT_COST;
    use std::time::Duration;

    async fn authenticator() -> Authenticator {
        let pool = db::connect("sqlite::memory:").await.unwrap();
        Authenticator::new(
            UserStore::new(pool),
            PasswordHasher::new(MIN_BCRYPT_COST),
            TokenIssuer::new("flow-secret", Duration::from_secs(60)),
        )
    }

    async fn register(auth: &Authenticator, email: &str) -> Result<User, AuthError> {
        auth.register("Alice", email, "password123").await
    }

    #[tokio::test]
    async fn test_register_stores_hash() {
        let auth = authenticator().await;
        let user = register(&auth, "alice@example.com").await.unwrap();

        assert_ne!(user.password, "password123");
        assert!(bcrypt::verify("password123", &user.password).unwrap());
    }

    #[tokio::test]
    async fn test_register_duplicate() {
        let auth = authenticator().await;
        register(&auth, "dup@example.com").await.unwrap();

        let err = register(&auth, "dup@example.com").await.unwrap_err();
        assert!(matches!(err, AuthError::UserAlreadyExists));
        assert_eq!(auth.users().count_by_email("dup@example.com").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_duplicate_registration() {
        let auth = authenticator().await;

        let (first, second) = tokio::join!(
            register(&auth, "race@example.com"),
            register(&auth, "race@example.com"),
        );

        let outcomes = [first, second];
        assert_eq!(outcomes.iter().filter(|r| r.is_ok()).count(), 1);
        assert!(outcomes
            .iter()
            .any(|r| matches!(r, Err(AuthError::UserAlreadyExists))));
        assert_eq!(auth.users().count_by_email("race@example.com").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_login_success() {
        let auth = authenticator().await;
        register(&auth, "alice@example.com").await.unwrap();

        let token = auth.login("alice@example.com", "password123").await.unwrap();
        let claims = auth.tokens().verify_token(&token).unwrap();
        assert_eq!(claims.email, "alice@example.com");
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let auth = authenticator().await;
        register(&auth, "alice@example.com").await.unwrap();

        let wrong_password = auth.login("alice@example.com", "nope").await.unwrap_err();
        let unknown_email = auth.login("bob@example.com", "password123").await.unwrap_err();

        assert!(matches!(wrong_password, AuthError::InvalidCredentials));
        assert!(matches!(unknown_email, AuthError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    }
}
