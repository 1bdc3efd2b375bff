//! Route Configuration Module
//!
//! ```text
//! routes/
//! ├── mod.rs         - Module exports and documentation
//! ├── router.rs      - Main router creation, CORS and tracing layers
//! └── api_routes.rs  - /api/v1 endpoints
//! ```
//!
//! # Routes
//!
//! | Method | Path | Handler |
//! |---|---|---|
//! | GET | `/` | server status |
//! | POST | `/api/v1/register` | register |
//! | POST | `/api/v1/login` | login |
//! | POST | `/api/v1/donations/create` | create donation |
//! | GET | `/api/v1/donations` | list donations |
//! | GET | `/api/v1/donations/{id}` | get donation |

/// Main router creation
pub mod router;

/// API endpoint routes
pub mod api_routes;

pub use router::create_router;
