/**
 * Application State Management
 *
 * [`AppState`] is the process-scoped resource handle: it owns the database
 * pool (opened once at startup) and the components built on top of it, and
 * is passed to handlers through Axum's `State` extractor.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let a handler ask for just the component it
 * uses (`State<Authenticator>`, `State<DonationStore>`) instead of the whole
 * `AppState`.
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::{Authenticator, PasswordHasher, TokenIssuer, UserStore};
use crate::backend::donations::DonationStore;
use crate::backend::server::config::ServerConfig;

/// Shared state for all request handlers
///
/// Every field is cheap to clone: the pool and token keys are reference
/// counted internally.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: SqlitePool,

    /// Registration and login
    pub auth: Authenticator,

    /// Donation documents
    pub donations: DonationStore,
}

impl AppState {
    /// Build the state from an open pool and the loaded configuration.
    pub fn new(db_pool: SqlitePool, config: &ServerConfig) -> Self {
        let auth = Authenticator::new(
            UserStore::new(db_pool.clone()),
            PasswordHasher::new(config.bcrypt_cost),
            TokenIssuer::new(&config.jwt_secret, config.token_ttl),
        );
        let donations = DonationStore::new(db_pool.clone());

        Self {
            db_pool,
            auth,
            donations,
        }
    }
}

impl FromRef<AppState> for Authenticator {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth.clone()
    }
}

impl FromRef<AppState> for DonationStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.donations.clone()
    }
}
