//! # Domain Types
//!
//! Core domain types used throughout Scanpoint.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │   ScanEvent     │   │   RecentScan    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  barcode        │       │
//! │  │  code (barcode) │   │  barcode        │   │  scanned_at     │       │
//! │  │  name           │   │  scanned_at     │   │  product_name?  │       │
//! │  │  price_cents    │   │  (insert-only)  │   │  price_cents?   │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Every stored entity has:
//! - `id`: UUID v4 - immutable, used for database relations
//! - Business key: the barcode (`code`) - what clients actually look up

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A catalogue entry a barcode can resolve to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// The barcode - business lookup key, matched by exact equality.
    pub code: String,

    /// Display name shown on the dashboard and in responses.
    pub name: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// When the catalogue row was created.
    pub created_at: DateTime<Utc>,

    /// When the catalogue row was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Scan Event
// =============================================================================

/// One recorded scan. Insert-only audit data.
///
/// The barcode is stored verbatim, resolved or not, so the audit log is a
/// faithful record of what scanners actually sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct ScanEvent {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// The barcode exactly as received.
    pub barcode: String,

    /// Server-assigned timestamp (database clock, not client clock).
    pub scanned_at: DateTime<Utc>,
}

// =============================================================================
// Recent Scan (dashboard projection)
// =============================================================================

/// A scan event joined against the catalogue, for the dashboard.
///
/// `product_name`/`price_cents` are `None` when the scanned barcode has no
/// catalogue row. That is a normal outcome, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct RecentScan {
    /// The barcode exactly as received.
    pub barcode: String,

    /// When the scan was recorded.
    pub scanned_at: DateTime<Utc>,

    /// Resolved product name, if the barcode matched the catalogue.
    pub product_name: Option<String>,

    /// Resolved price in cents, if the barcode matched the catalogue.
    pub price_cents: Option<i64>,
}

impl RecentScan {
    /// Returns the resolved price as Money, if any.
    #[inline]
    pub fn price(&self) -> Option<Money> {
        self.price_cents.map(Money::from_cents)
    }

    /// Whether the scan resolved against the catalogue.
    #[inline]
    pub fn is_resolved(&self) -> bool {
        self.product_name.is_some()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn milk() -> Product {
        let now = Utc::now();
        Product {
            id: "00000000-0000-0000-0000-000000000001".to_string(),
            code: "123".to_string(),
            name: "Milk".to_string(),
            price_cents: 1250,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_product_price_accessor() {
        assert_eq!(milk().price(), Money::from_cents(1250));
        assert_eq!(milk().price().format_amount(), "12.50");
    }

    #[test]
    fn test_recent_scan_resolution() {
        let hit = RecentScan {
            barcode: "123".to_string(),
            scanned_at: Utc::now(),
            product_name: Some("Milk".to_string()),
            price_cents: Some(1250),
        };
        assert!(hit.is_resolved());
        assert_eq!(hit.price(), Some(Money::from_cents(1250)));

        let miss = RecentScan {
            barcode: "999".to_string(),
            scanned_at: Utc::now(),
            product_name: None,
            price_cents: None,
        };
        assert!(!miss.is_resolved());
        assert_eq!(miss.price(), None);
    }
}
