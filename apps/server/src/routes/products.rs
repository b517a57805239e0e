//! # Catalogue Routes
//!
//! Read-only catalogue endpoints. Unlike `POST /api/barcode`, these do not
//! record scan events; they are for browsing the catalogue, not reporting
//! scans.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use scanpoint_core::validation::validate_barcode;
use scanpoint_core::Product;

use crate::error::ApiError;
use crate::AppState;

/// Upper bound on catalogue listing size.
const CATALOGUE_LIST_LIMIT: i64 = 500;

// =============================================================================
// Response DTOs
// =============================================================================

/// A catalogue row as clients see it.
///
/// `price` is a decimal string with two fraction digits ("12.50"), rendered
/// from integer cents. Floats never cross the wire.
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub barcode: String,
    pub product_name: String,
    pub price: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        ProductResponse {
            price: product.price().format_amount(),
            barcode: product.code,
            product_name: product.name,
        }
    }
}

/// Price-only response variant.
#[derive(Debug, Serialize)]
pub struct PriceResponse {
    pub barcode: String,
    pub price: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// `GET /api/products` - lists the catalogue.
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let products = state.db.products().list(CATALOGUE_LIST_LIMIT).await?;
    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}

/// `GET /api/products/{code}` - resolves a barcode without recording a scan.
pub async fn get_product(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<ProductResponse>, ApiError> {
    validate_barcode(&code)?;

    match state.db.products().find_by_code(&code).await? {
        Some(product) => Ok(Json(ProductResponse::from(product))),
        None => Err(ApiError::unknown_barcode(&code)),
    }
}

/// `GET /api/products/{code}/price` - price-only lookup variant.
pub async fn get_price(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<PriceResponse>, ApiError> {
    validate_barcode(&code)?;

    match state.db.products().price_of(&code).await? {
        Some(price) => Ok(Json(PriceResponse {
            barcode: code,
            price: price.format_amount(),
        })),
        None => Err(ApiError::unknown_barcode(&code)),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

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
    fn test_product_response_shape() {
        let response = ProductResponse::from(milk());
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["barcode"], "123");
        assert_eq!(value["product_name"], "Milk");
        assert_eq!(value["price"], "12.50");
    }

    #[test]
    fn test_price_is_a_string_not_a_float() {
        let value = serde_json::to_value(ProductResponse::from(milk())).unwrap();
        assert!(value["price"].is_string());
    }
}
