/**
 * Session Tokens
 *
 * This module issues and verifies the JWT handed out at login. The token
 * carries the user's email and an expiry; nothing about it is persisted.
 */

use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Email of the authenticated user
    pub email: String,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

/// Signs and verifies session tokens with a shared HMAC secret
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
    ttl: Duration,
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl TokenIssuer {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
            ttl,
        }
    }

    /// Create a token for `email`, valid for the configured TTL.
    pub fn create_token(&self, email: &str) -> Result<String, jsonwebtoken::errors::Error> {
        let now = unix_now();
        let claims = Claims {
            email: email.to_string(),
            iat: now,
            exp: now.saturating_add(self.ttl.as_secs()),
        };

        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Verify a token's signature and expiry and return its claims.
    pub fn verify_token(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let validation = Validation::default();
        let token_data = decode::<Claims>(token, &self.decoding, &validation)?;
        Ok(token_data.claims)
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issuer() -> TokenIssuer {
        TokenIssuer::new("test-secret", Duration::from_secs(3600))
    }

    #[test]
    fn test_create_token() {
        let token = issuer().create_token("test@example.com").unwrap();
        assert!(!token.is_empty());
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_verify_token() {
        let token = issuer().create_token("test@example.com").unwrap();
        let claims = issuer().verify_token(&token).unwrap();
        assert_eq!(claims.email, "test@example.com");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_verify_invalid_token() {
        assert!(issuer().verify_token("invalid.token.here").is_err());
    }

    #[test]
    fn test_verify_wrong_secret() {
        let token = issuer().create_token("test@example.com").unwrap();
        let other = TokenIssuer::new("other-secret", Duration::from_secs(3600));
        assert!(other.verify_token(&token).is_err());
    }

    #[test]
    fn test_verify_expired_token() {
        let issuer = issuer();
        let now = unix_now();
        let claims = Claims {
            email: "old@example.com".to_string(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(&Header::default(), &claims, &issuer.encoding).unwrap();

        let err = issuer.verify_token(&token).unwrap_err();
        assert!(matches!(
            err.kind(),
            jsonwebtoken::errors::ErrorKind::ExpiredSignature
        ));
    }
}
