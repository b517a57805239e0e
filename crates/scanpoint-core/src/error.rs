//! # Error Types
//!
//! Validation error types for scanpoint-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  scanpoint-core errors (this file)                                      │
//! │  └── ValidationError  - Input validation failures (400s)                │
//! │                                                                         │
//! │  scanpoint-db errors (separate crate)                                   │
//! │  └── DbError          - Database operation failures (500s)              │
//! │                                                                         │
//! │  HTTP API errors (in apps/server)                                       │
//! │  └── ApiError         - What clients see (serialized, detail-free)      │
//! │                                                                         │
//! │  Flow: ValidationError ─┐                                               │
//! │        DbError ─────────┴──► ApiError ──► HTTP response                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, limits)
//! 3. Errors are enum variants, never String

use thiserror::Error;

/// Input validation errors.
///
/// These occur when a request doesn't meet requirements, before any
/// data-store access happens.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid content (e.g. embedded NUL bytes).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::Required {
            field: "barcode".to_string(),
        };
        assert_eq!(err.to_string(), "barcode is required");

        let err = ValidationError::TooLong {
            field: "barcode".to_string(),
            max: 128,
        };
        assert_eq!(err.to_string(), "barcode must be at most 128 characters");
    }
}
