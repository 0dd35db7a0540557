//! Use cases: one application operation each.
//!
//! Each use case translates a transport request into domain value objects,
//! performs exactly one aggregate interaction through the repository port and
//! translates the result back.

use std::sync::Arc;

use crate::application::dtos::{
    CreateProductRequest, PriceDto, ProductListResponse, ProductResponse, StockDto,
    UpdateProductRequest,
};
use crate::domain::aggregates::{Product, ProductId};
use crate::domain::repositories::ProductRepository;
use crate::domain::value_objects::{Currency, Price, Stock};
use crate::error::{CatalogError, Result};

fn price_from_dto(dto: &PriceDto) -> Result<Price> {
    let currency = Currency::from_code(&dto.currency)?;
    Price::new(dto.amount, currency)
}

fn stock_from_dto(dto: &StockDto) -> Result<Stock> {
    Stock::new(dto.quantity)
}

pub struct CreateProductUseCase {
    repository: Arc<dyn ProductRepository>,
}

impl CreateProductUseCase {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, request: CreateProductRequest) -> Result<ProductResponse> {
        let price = price_from_dto(&request.price)?;
        let stock = stock_from_dto(&request.stock)?;
        let product = Product::create(&request.name, &request.description, price, stock)?;

        let saved = self.repository.save(product).await?;
        tracing::info!(product_id = %saved.id(), "product created");
        Ok(ProductResponse::from(&saved))
    }
}

pub struct GetProductByIdUseCase {
    repository: Arc<dyn ProductRepository>,
}

impl GetProductByIdUseCase {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: &str) -> Result<ProductResponse> {
        let product_id: ProductId = id.parse()?;
        let product = self
            .repository
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| CatalogError::not_found(id))?;
        Ok(ProductResponse::from(&product))
    }
}

pub struct GetAllProductsUseCase {
    repository: Arc<dyn ProductRepository>,
}

impl GetAllProductsUseCase {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Result<ProductListResponse> {
        let products = self.repository.find_all().await?;
        let products: Vec<ProductResponse> = products.iter().map(ProductResponse::from).collect();
        let total_count = products.len();
        Ok(ProductListResponse {
            products,
            total_count,
        })
    }
}

pub struct UpdateProductUseCase {
    repository: Arc<dyn ProductRepository>,
}

impl UpdateProductUseCase {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: &str, request: UpdateProductRequest) -> Result<ProductResponse> {
        let product_id: ProductId = id.parse()?;
        let mut product = self
            .repository
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| CatalogError::not_found(id))?;

        product.update_product(&request.name, &request.description)?;
        if let Some(price) = &request.price {
            product.update_price(price_from_dto(price)?);
        }
        if let Some(stock) = &request.stock {
            product.update_stock(stock_from_dto(stock)?);
        }

        let saved = self.repository.save(product).await?;
        tracing::info!(product_id = %saved.id(), "product updated");
        Ok(ProductResponse::from(&saved))
    }
}

pub struct DeleteProductUseCase {
    repository: Arc<dyn ProductRepository>,
}

impl DeleteProductUseCase {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: &str) -> Result<()> {
        let product_id: ProductId = id.parse()?;
        if !self.repository.exists_by_id(product_id).await? {
            return Err(CatalogError::not_found(id));
        }
        self.repository.delete_by_id(product_id).await?;
        tracing::info!(product_id = %product_id, "product deleted");
        Ok(())
    }
}
