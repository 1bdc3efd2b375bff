//! Server Module
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs     - Module exports and documentation
//! ├── config.rs  - Environment configuration
//! ├── state.rs   - AppState and FromRef implementations
//! └── init.rs    - Database connection and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ServerConfig::from_env`
//! 2. **Database**: pool opened, migrations applied
//! 3. **State Creation**: `AppState` wraps the pool and auth components
//! 4. **Router Creation**: routes, CORS and tracing layers

/// Server configuration loading
pub mod config;

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

pub use config::{ConfigError, ServerConfig};
pub use init::create_app;
pub use state::AppState;
