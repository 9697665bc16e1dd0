//! Comanda Server - restaurant order management backend
//!
//! The core is the order lifecycle and catalog-consistency engine: staff
//! authenticate, maintain the menu catalog, and place/track table orders
//! whose totals are price snapshots frozen at creation time.
//!
//! # Module structure
//!
//! ```text
//! src/
//! ├── core/     # config, state, HTTP bootstrap
//! ├── auth/     # argon2 passwords, session store, access gate
//! ├── api/      # HTTP routes and handlers
//! ├── db/       # SQLite pool, models, repositories
//! └── utils/    # errors, logging, validation, time/id helpers
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod utils;

// Re-export common types
pub use auth::{CurrentUser, Session, SessionStore};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResponse, AppResult};
pub use utils::logger::{init_logger, init_logger_with_file};
