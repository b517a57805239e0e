//! # scanpoint-db: Database Layer for Scanpoint
//!
//! This crate provides database access for the Scanpoint service.
//! It uses PostgreSQL with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Scanpoint Data Flow                               │
//! │                                                                         │
//! │  HTTP handler (POST /api/barcode)                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   scanpoint-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │               │    │  (embedded)  │  │   │
//! │  │   │               │    │ ProductRepo   │    │              │  │   │
//! │  │   │ PgPool        │◄───│ ScanRepo      │    │ 001_products │  │   │
//! │  │   │ scoped        │    │               │    │ 002_scan_ev. │  │   │
//! │  │   │ acquire       │    │               │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PostgreSQL: products (catalogue) + scan_events (audit log)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations (product, scan)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use scanpoint_db::{Database, DbConfig};
//!
//! let config = DbConfig::new("localhost", 5432, "scanpoint", "scanpoint", "secret");
//! let db = Database::new(config).await?;
//!
//! // Use repositories
//! let product = db.products().find_by_code("5901234123457").await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::product::ProductRepository;
pub use repository::scan::ScanRepository;
