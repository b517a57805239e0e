//! # Scanpoint Server
//!
//! HTTP service for barcode scan intake and product resolution.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         HTTP Surface                                    │
//! │                                                                         │
//! │  ┌────────────────────┐  ┌────────────────────┐  ┌──────────────────┐  │
//! │  │ POST /api/barcode  │  │ GET /api/products  │  │ GET /            │  │
//! │  │                    │  │     /{code}        │  │                  │  │
//! │  │ • audit insert     │  │     /{code}/price  │  │ • HTML dashboard │  │
//! │  │ • resolve          │  │                    │  │ • recent scans   │  │
//! │  │ • JSON response    │  │ • catalogue reads  │  │                  │  │
//! │  └────────────────────┘  └────────────────────┘  └──────────────────┘  │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                      Infrastructure                               │  │
//! │  │                                                                   │  │
//! │  │  ┌──────────────┐  ┌──────────────────┐  ┌──────────────────────┐│  │
//! │  │  │  PostgreSQL  │  │  Typed errors    │  │  tracing             ││  │
//! │  │  │  (pooled via │  │  400 / 404 / 500 │  │  fault detail stays  ││  │
//! │  │  │  scanpoint-  │  │  kinds           │  │  in the log          ││  │
//! │  │  │  db)         │  │                  │  │                      ││  │
//! │  │  └──────────────┘  └──────────────────┘  └──────────────────────┘│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `PORT` - HTTP listen port (default: 5000)
//! - `DATABASE_URL` - full connection string, overrides the part-wise set
//! - `DATABASE_HOST` / `DATABASE_PORT` / `DATABASE_NAME` / `DATABASE_USER` /
//!   `DATABASE_PASSWORD` / `DB_SSLMODE` - part-wise database settings
//! - `DB_MAX_CONNECTIONS` - pool bound (default: 5)
//! - `DASHBOARD_SCAN_LIMIT` - recent scans shown on the dashboard (default: 20)
//! - `RUST_LOG` - tracing filter (default: info)

pub mod config;
pub mod error;
pub mod routes;

// Re-exports
pub use config::ServerConfig;
pub use error::{ApiError, ErrorCode};

use scanpoint_db::Database;

/// Shared application state.
///
/// Cloned per handler invocation; the database handle shares one pool
/// across all clones.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub config: ServerConfig,
}
