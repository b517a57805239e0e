//! # Scan Intake Route
//!
//! `POST /api/barcode` - the scan event endpoint.
//!
//! ## Request Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     POST /api/barcode                                   │
//! │                                                                         │
//! │  {"barcode": "5901234123457"}                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Validate (pure, no I/O)  ── empty/missing ──► 400 INVALID_INPUT        │
//! │       │                      No query is issued for invalid input.      │
//! │       ▼                                                                 │
//! │  Record scan event        ── fault ──────────► 500 DATABASE_ERROR       │
//! │  (audit insert, always -                                                │
//! │   resolved or not)                                                      │
//! │       ▼                                                                 │
//! │  Resolve against catalogue                                              │
//! │       ├── match ─────────────────────────────► 200 {barcode,name,price} │
//! │       └── no match ──────────────────────────► 404 NOT_FOUND            │
//! │                                                                         │
//! │  Each request reads only its own result. There is no process-wide       │
//! │  "last scan" state to race on; the dashboard reads the audit log.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use tracing::info;

use scanpoint_core::validation::validate_barcode;

use crate::error::ApiError;
use crate::routes::products::ProductResponse;
use crate::AppState;

/// Incoming scan request body.
///
/// `barcode` is optional at the deserialization layer so that a missing
/// field reports "barcode is required" instead of a generic parse error.
#[derive(Debug, Deserialize)]
pub struct ScanRequest {
    #[serde(default)]
    pub barcode: Option<String>,
}

/// `POST /api/barcode` - records the scan, then resolves it.
pub async fn receive_scan(
    State(state): State<AppState>,
    payload: Result<Json<ScanRequest>, JsonRejection>,
) -> Result<Json<ProductResponse>, ApiError> {
    let Json(request) = payload
        .map_err(|rejection| ApiError::invalid_input(format!("Invalid request body: {}", rejection)))?;

    let barcode = request.barcode.unwrap_or_default();

    // Validation runs before any pool access; an invalid scan never
    // reaches the database.
    validate_barcode(&barcode)?;

    // The audit log records every received barcode, resolved or not.
    let event = state.db.scans().record(&barcode).await?;

    match state.db.products().find_by_code(&barcode).await? {
        Some(product) => {
            info!(
                scan_id = %event.id,
                barcode = %barcode,
                product = %product.name,
                price = %product.price(),
                "Scan resolved"
            );
            Ok(Json(ProductResponse::from(product)))
        }
        None => {
            info!(scan_id = %event.id, barcode = %barcode, "Scan did not resolve");
            Err(ApiError::unknown_barcode(&barcode))
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_barcode_field_deserializes_to_none() {
        let request: ScanRequest = serde_json::from_str("{}").unwrap();
        assert!(request.barcode.is_none());
    }

    #[test]
    fn test_null_barcode_deserializes_to_none() {
        let request: ScanRequest = serde_json::from_str(r#"{"barcode": null}"#).unwrap();
        assert!(request.barcode.is_none());
    }

    #[test]
    fn test_barcode_is_kept_verbatim() {
        let request: ScanRequest = serde_json::from_str(r#"{"barcode": " 123 "}"#).unwrap();
        assert_eq!(request.barcode.as_deref(), Some(" 123 "));
    }

    /// The handler turns an absent field into an empty barcode, which the
    /// validator rejects before any data-store access.
    #[test]
    fn test_absent_barcode_fails_validation() {
        let request: ScanRequest = serde_json::from_str("{}").unwrap();
        let barcode = request.barcode.unwrap_or_default();
        assert!(validate_barcode(&barcode).is_err());
    }
}
