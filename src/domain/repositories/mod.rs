//! Persistence port consumed by the use cases.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::aggregates::{Product, ProductId};
use crate::error::Result;

/// Abstract product store. The domain defines the contract; the
/// infrastructure layer supplies the storage technology. Any transactional
/// or locking discipline lives behind this boundary.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert or update, returning the persisted state.
    async fn save(&self, product: Product) -> Result<Product>;

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>>;

    async fn find_all(&self) -> Result<Vec<Product>>;

    /// Case-insensitive substring match on the product name.
    async fn find_by_name_containing(&self, name: &str) -> Result<Vec<Product>>;

    async fn find_in_stock_products(&self) -> Result<Vec<Product>>;

    async fn find_out_of_stock_products(&self) -> Result<Vec<Product>>;

    /// Products whose price amount falls within `[min, max]`, inclusive.
    async fn find_by_price_range(&self, min: Decimal, max: Decimal) -> Result<Vec<Product>>;

    async fn delete_by_id(&self, id: ProductId) -> Result<()>;

    async fn exists_by_id(&self, id: ProductId) -> Result<bool>;

    async fn count(&self) -> Result<i64>;

    async fn count_in_stock_products(&self) -> Result<i64>;
}
