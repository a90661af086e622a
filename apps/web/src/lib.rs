//! # Inventory Web Server
//!
//! HTTP front end for categories, goods, providers and orders.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Request Lifecycle                               │
//! │                                                                         │
//! │  Browser / client                                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Router (axum) ── TraceLayer (tower-http)                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Handler: parse form / JSON → inventory-core drafts                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  db.begin() → repositories → commit                                    │
//! │       │                                                                 │
//! │       ├── JSON page / lookup                                           │
//! │       ├── 303 redirect to the list page                                │
//! │       └── ApiError (JSON) / ErrorPage (HTML)                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! See [`config`]. Environment variables:
//! - `INVENTORY_CONFIG` - TOML config file
//! - `INVENTORY_HOST` / `INVENTORY_PORT` - listener address (default: 127.0.0.1:8000)
//! - `INVENTORY_DB_PATH` - SQLite file (default: ./inventory.db)
//! - `INVENTORY_DB_MAX_CONNECTIONS` - pool size (default: 5)
//! - `RUST_LOG` - log filter (default: info)

pub mod config;
pub mod error;
pub mod routes;

// Re-exports
pub use config::AppConfig;
pub use error::{ApiError, ErrorCode, ErrorPage};
pub use routes::create_router;

use inventory_db::Database;

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Database,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        AppState { db }
    }
}
