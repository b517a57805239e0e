//! # Route Layer
//!
//! One module per operation group, mirroring the HTTP surface:
//!
//! - [`barcode`] - `POST /api/barcode`: scan intake (audit insert + resolve)
//! - [`products`] - `GET /api/products[/{code}[/price]]`: catalogue reads
//! - [`dashboard`] - `GET /`: server-rendered HTML dashboard
//! - [`health`] - `GET /health`: liveness with a database round-trip

pub mod barcode;
pub mod dashboard;
pub mod health;
pub mod products;

use axum::routing::{get, post};
use axum::Router;

use crate::AppState;

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(dashboard::dashboard))
        .route("/health", get(health::health))
        .route("/api/barcode", post(barcode::receive_scan))
        .route("/api/products", get(products::list_products))
        .route("/api/products/{code}", get(products::get_product))
        .route("/api/products/{code}/price", get(products::get_price))
        .with_state(state)
}
