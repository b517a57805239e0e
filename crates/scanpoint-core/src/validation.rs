//! # Validation Module
//!
//! Input validation for incoming scan requests.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP extractor (axum)                                         │
//! │  ├── Body must be JSON with the expected shape                          │
//! │  └── Rejections become 400s before this module runs                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                   │
//! │  ├── Barcode must be present and non-empty                              │
//! │  └── Runs BEFORE any database access - an invalid scan never            │
//! │      touches the pool                                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (PostgreSQL)                                         │
//! │  ├── NOT NULL constraints                                               │
//! │  └── UNIQUE constraint on catalogue codes                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What is NOT validated
//! A barcode is an opaque key. It is never trimmed, case-folded, or checked
//! against a symbology; `" 123 "` and `"123"` are two different barcodes and
//! resolve independently. Whitespace-only input is therefore accepted.

use crate::error::{ValidationError, ValidationResult};
use crate::MAX_BARCODE_LEN;

/// Validates a barcode received from a client.
///
/// ## Rules
/// - Must not be empty (absence of the field counts as empty)
/// - Must be at most [`MAX_BARCODE_LEN`] bytes
/// - Must not contain NUL bytes (PostgreSQL text cannot store them, and
///   letting one through would turn a client mistake into a query fault)
///
/// ## Example
/// ```rust
/// use scanpoint_core::validation::validate_barcode;
///
/// assert!(validate_barcode("5901234123457").is_ok());
/// assert!(validate_barcode("").is_err());
/// ```
pub fn validate_barcode(barcode: &str) -> ValidationResult<()> {
    if barcode.is_empty() {
        return Err(ValidationError::Required {
            field: "barcode".to_string(),
        });
    }

    if barcode.len() > MAX_BARCODE_LEN {
        return Err(ValidationError::TooLong {
            field: "barcode".to_string(),
            max: MAX_BARCODE_LEN,
        });
    }

    if barcode.contains('\0') {
        return Err(ValidationError::InvalidFormat {
            field: "barcode".to_string(),
            reason: "must not contain NUL bytes".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_normal_barcodes() {
        assert!(validate_barcode("5901234123457").is_ok());
        assert!(validate_barcode("123").is_ok());
        assert!(validate_barcode("ABC-001").is_ok());
    }

    #[test]
    fn test_rejects_empty() {
        let err = validate_barcode("").unwrap_err();
        assert!(matches!(err, ValidationError::Required { .. }));
    }

    #[test]
    fn test_rejects_oversized() {
        let long = "9".repeat(MAX_BARCODE_LEN + 1);
        let err = validate_barcode(&long).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { .. }));

        // Exactly at the cap is fine.
        let max = "9".repeat(MAX_BARCODE_LEN);
        assert!(validate_barcode(&max).is_ok());
    }

    #[test]
    fn test_rejects_nul_bytes() {
        let err = validate_barcode("12\0 34").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
    }

    /// Barcodes are opaque keys: no trimming or normalization happens, so
    /// whitespace-only input is a legal (if unusual) barcode.
    #[test]
    fn test_whitespace_is_not_normalized() {
        assert!(validate_barcode("   ").is_ok());
        assert!(validate_barcode(" 123 ").is_ok());
    }
}
