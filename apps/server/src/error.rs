//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Scanpoint                              │
//! │                                                                         │
//! │  Client                       Rust Backend                              │
//! │  ──────                       ────────────                              │
//! │                                                                         │
//! │  POST /api/barcode                                                      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Handler: Result<Json<T>, ApiError>                              │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  ValidationError ── "barcode is required" ──► 400 INVALID_INPUT  │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  No catalogue row ─────────────────────────► 404 NOT_FOUND       │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  DbError ── detail to tracing::error! ─────► 500 DATABASE_ERROR  │  │
//! │  │             client sees ONLY a generic message                   │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  { "code": "NOT_FOUND", "error": "No product matches barcode 999" }     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The no-leak rule
//! Data-access faults carry connection strings, SQL fragments, and server
//! addresses in their messages. Those go to the structured log and nowhere
//! else; every `DATABASE_ERROR` response body is a fixed generic sentence.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use scanpoint_core::ValidationError;
use scanpoint_db::DbError;

/// API error returned from HTTP handlers.
///
/// ## Serialization
/// This is what clients receive when a request fails:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "error": "No product matches barcode 999"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    #[serde(rename = "error")]
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input validation failed (400)
    InvalidInput,

    /// Resource not found (404)
    NotFound,

    /// Database operation failed (500)
    DatabaseError,

    /// Internal server error (500)
    Internal,
}

impl ErrorCode {
    /// HTTP status for this error kind.
    pub fn status(&self) -> StatusCode {
        match self {
            ErrorCode::InvalidInput => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates an invalid-input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::InvalidInput, message)
    }

    /// Creates a not-found error for an unresolved barcode.
    pub fn unknown_barcode(code: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("No product matches barcode {}", code),
        )
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts validation errors to API errors.
///
/// Validation messages name the offending field and limit; they carry no
/// internal detail, so they pass through verbatim.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::invalid_input(err.to_string())
    }
}

/// Converts database errors to API errors.
///
/// Every fault variant logs its detail and surfaces a generic message.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, key } => ApiError::new(
                ErrorCode::NotFound,
                format!("{} not found: {}", entity, key),
            ),
            DbError::UniqueViolation { constraint } => {
                tracing::error!(constraint = %constraint, "Unique constraint violation");
                ApiError::invalid_input("Value already exists")
            }
            DbError::ForeignKeyViolation { message } => {
                tracing::error!(detail = %message, "Foreign key violation");
                ApiError::invalid_input("Invalid reference")
            }
            DbError::ConnectionFailed(detail) => {
                tracing::error!(detail = %detail, "Database connection failed");
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
            DbError::InvalidConfig(detail) => {
                tracing::error!(detail = %detail, "Invalid database configuration");
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
            DbError::MigrationFailed(detail) => {
                tracing::error!(detail = %detail, "Database migration failed");
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
            DbError::QueryFailed(detail) => {
                tracing::error!(detail = %detail, "Database query failed");
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
            DbError::PoolExhausted => {
                tracing::error!("Connection pool exhausted");
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
            DbError::Internal(detail) => {
                tracing::error!(detail = %detail, "Internal database error");
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
        }
    }
}

/// Renders the error as an HTTP response with the matching status code.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.code.status();
        (status, Json(self)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ErrorCode::InvalidInput.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorCode::DatabaseError.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_error_maps_to_invalid_input() {
        let err: ApiError = ValidationError::Required {
            field: "barcode".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert_eq!(err.message, "barcode is required");
    }

    /// Data-access fault detail must never reach the client-visible message.
    #[test]
    fn test_connection_fault_detail_is_suppressed() {
        let detail = "connection refused: db-prod-7.internal:5432 password=hunter2";
        let err: ApiError = DbError::ConnectionFailed(detail.to_string()).into();

        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert!(!err.message.contains("db-prod-7"));
        assert!(!err.message.contains("hunter2"));
        assert!(!err.message.contains(detail));
        assert_eq!(err.message, "Database operation failed");
    }

    #[test]
    fn test_query_fault_detail_is_suppressed() {
        let detail = "syntax error at or near \"SELEKT\"";
        let err: ApiError = DbError::QueryFailed(detail.to_string()).into();
        assert!(!err.message.contains("SELEKT"));
    }

    #[test]
    fn test_serialized_shape_has_error_key() {
        let err = ApiError::unknown_barcode("999");
        let value = serde_json::to_value(&err).unwrap();

        assert_eq!(value["code"], "NOT_FOUND");
        assert_eq!(value["error"], "No product matches barcode 999");
    }
}
