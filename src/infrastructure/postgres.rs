//! Postgres implementation of the product repository port.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::aggregates::{Product, ProductId};
use crate::domain::repositories::ProductRepository;
use crate::domain::value_objects::{Currency, Price, Stock};
use crate::error::{CatalogError, Result};

impl From<sqlx::Error> for CatalogError {
    fn from(e: sqlx::Error) -> Self {
        CatalogError::Storage(e.to_string())
    }
}

/// Storage row. Timestamps are bookkeeping for the table only and never reach
/// the aggregate.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: Uuid,
    name: String,
    description: String,
    price_amount: Decimal,
    price_currency: String,
    stock_quantity: i64,
    #[allow(dead_code)]
    created_at: DateTime<Utc>,
    #[allow(dead_code)]
    updated_at: DateTime<Utc>,
}

impl ProductRow {
    fn into_domain(self) -> Result<Product> {
        let currency = Currency::from_code(&self.price_currency)?;
        let price = Price::new(self.price_amount, currency)?;
        let stock = Stock::new(self.stock_quantity)?;
        Product::reconstruct(
            ProductId::from_uuid(self.id),
            &self.name,
            &self.description,
            price,
            stock,
        )
    }
}

pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_rows(&self, query: &str) -> Result<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(query)
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter().map(ProductRow::into_domain).collect()
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn save(&self, product: Product) -> Result<Product> {
        let row = sqlx::query_as::<_, ProductRow>(
            "INSERT INTO products (id, name, description, price_amount, price_currency, stock_quantity, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, NOW(), NOW()) \
             ON CONFLICT (id) DO UPDATE SET name = $2, description = $3, price_amount = $4, price_currency = $5, stock_quantity = $6, updated_at = NOW() \
             RETURNING *",
        )
        .bind(product.id().as_uuid())
        .bind(product.name())
        .bind(product.description())
        .bind(product.price().amount())
        .bind(product.price().currency().code())
        .bind(product.stock().quantity())
        .fetch_one(&self.pool)
        .await?;
        row.into_domain()
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>("SELECT * FROM products WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;
        row.map(ProductRow::into_domain).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Product>> {
        self.fetch_rows("SELECT * FROM products ORDER BY created_at DESC")
            .await
    }

    async fn find_by_name_containing(&self, name: &str) -> Result<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(
            "SELECT * FROM products WHERE name ILIKE '%' || $1 || '%' ORDER BY created_at DESC",
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(ProductRow::into_domain).collect()
    }

    async fn find_in_stock_products(&self) -> Result<Vec<Product>> {
        self.fetch_rows("SELECT * FROM products WHERE stock_quantity > 0 ORDER BY created_at DESC")
            .await
    }

    async fn find_out_of_stock_products(&self) -> Result<Vec<Product>> {
        self.fetch_rows("SELECT * FROM products WHERE stock_quantity = 0 ORDER BY created_at DESC")
            .await
    }

    async fn find_by_price_range(&self, min: Decimal, max: Decimal) -> Result<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(
            "SELECT * FROM products WHERE price_amount BETWEEN $1 AND $2 ORDER BY price_amount",
        )
        .bind(min)
        .bind(max)
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(ProductRow::into_domain).collect()
    }

    async fn delete_by_id(&self, id: ProductId) -> Result<()> {
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn exists_by_id(&self, id: ProductId) -> Result<bool> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM products WHERE id = $1)")
                .bind(id.as_uuid())
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    async fn count(&self) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn count_in_stock_products(&self) -> Result<i64> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM products WHERE stock_quantity > 0")
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }
}
