//! Transport DTOs exchanged with the web layer.
//!
//! Request shapes carry `validator` constraints checked at the HTTP boundary
//! before any domain object is built; minimum lengths live here, not in the
//! aggregate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::aggregates::Product;

#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
pub struct PriceDto {
    pub amount: Decimal,
    #[validate(length(min = 1, message = "currency must not be blank"))]
    pub currency: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
pub struct StockDto {
    pub quantity: i64,
}

#[derive(Clone, Debug, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[validate(length(min = 2, message = "name must be at least 2 characters"))]
    pub name: String,
    #[validate(length(min = 10, message = "description must be at least 10 characters"))]
    pub description: String,
    #[validate]
    pub price: PriceDto,
    #[validate]
    pub stock: StockDto,
}

/// Partial update: omitted price/stock leave the stored values untouched.
#[derive(Clone, Debug, Deserialize, Validate)]
pub struct UpdateProductRequest {
    #[validate(length(min = 2, message = "name must be at least 2 characters"))]
    pub name: String,
    #[validate(length(min = 10, message = "description must be at least 10 characters"))]
    pub description: String,
    #[validate]
    pub price: Option<PriceDto>,
    #[validate]
    pub stock: Option<StockDto>,
}

#[derive(Clone, Debug, Serialize)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: PriceDto,
    pub stock: StockDto,
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id().to_string(),
            name: product.name().to_string(),
            description: product.description().to_string(),
            price: PriceDto {
                amount: product.price().amount(),
                currency: product.price().currency().code().to_string(),
            },
            stock: StockDto {
                quantity: product.stock().quantity(),
            },
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListResponse {
    pub products: Vec<ProductResponse>,
    pub total_count: usize,
}
