//! Common test utilities
//!
//! Builds the full router over a fresh in-memory database. Tests keep the
//! `AppState` to inspect storage directly.

#![allow(dead_code)]

use std::time::Duration;

use axum_test::TestServer;
use unity_aid::backend::db;
use unity_aid::backend::routes::create_router;
use unity_aid::backend::server::config::MIN_BCRYPT_COST;
use unity_aid::backend::{AppState, ServerConfig};

pub const TEST_SECRET: &str = "integration-test-secret";

pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
}

pub fn test_config() -> ServerConfig {
    ServerConfig {
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: TEST_SECRET.to_string(),
        token_ttl: Duration::from_secs(3600),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        bcrypt_cost: MIN_BCRYPT_COST,
    }
}

pub async fn spawn_app() -> TestApp {
    let config = test_config();
    let pool = db::connect(&config.database_url)
        .await
        .expect("Failed to create test database");
    let state = AppState::new(pool, &config);
    let app = create_router(state.clone(), &config.cors_origins);
    let server = TestServer::new(app).expect("Failed to start test server");

    TestApp { server, state }
}

/// Register a user through the API.
pub async fn register_user(app: &TestApp, name: &str, email: &str, password: &str) {
    let response = app
        .server
        .post("/api/v1/register")
        .json(&serde_json::json!({
            "name": name,
            "email": email,
            "password": password,
        }))
        .await;
    assert_eq!(response.status_code(), 201, "registration failed: {}", response.text());
}
