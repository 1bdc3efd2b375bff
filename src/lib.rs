//! Unity Aid - Donation Tracking Backend
//!
//! Unity Aid is a small HTTP/JSON backend for a donation-tracking application.
//! It handles user registration and login, and stores donation records as
//! schema-free JSON documents.
//!
//! # Overview
//!
//! - **Authentication** - bcrypt-hashed credentials, JWT session tokens
//! - **Donations** - create, list and fetch arbitrary JSON donation documents
//! - **Persistence** - SQLite through `sqlx`, one pool opened at startup
//!
//! # Module Structure
//!
//! All server-side code lives in [`backend`]:
//!
//! ```text
//! backend/
//! ├── server/     - Configuration, state, initialization
//! ├── routes/     - Route table and HTTP layers
//! ├── db/         - Pool creation, migrations, store errors
//! ├── auth/       - Users, password hashing, tokens, register/login
//! ├── donations/  - Donation store and handlers
//! ├── health.rs   - Root status route
//! ├── extract.rs  - JSON body extractor
//! └── error/      - API error taxonomy
//! ```
//!
//! # Running
//!
//! ```bash
//! JWT_SECRET=change-me cargo run --bin unity-aid-server
//! ```

pub mod backend;
