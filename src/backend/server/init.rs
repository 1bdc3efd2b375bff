/**
 * Server Initialization
 *
 * 1. Open the database pool and run migrations
 * 2. Build `AppState` from the pool and configuration
 * 3. Create the router with all routes and layers
 *
 * Unlike optional services, the database is required: a connection or
 * migration failure is returned to `main` and aborts startup.
 */

use axum::Router;

use crate::backend::db::{self, StoreError};
use crate::backend::routes::router::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, StoreError> {
    tracing::info!("Initializing Unity Aid backend server");

    let db_pool = db::connect(&config.database_url).await?;
    let app_state = AppState::new(db_pool, config);

    let app = create_router(app_state, &config.cors_origins);
    tracing::info!("Router configured");

    Ok(app)
}
