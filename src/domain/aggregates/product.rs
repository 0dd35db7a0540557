//! Product aggregate root.
//!
//! All consistency-bearing mutations of a product's price and stock go through
//! this type. Every mutator validates its input before assigning, so a failed
//! call leaves the aggregate untouched.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::value_objects::{Price, Stock};
use crate::error::{CatalogError, Result};

/// Opaque product identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(Uuid);

impl ProductId {
    /// Fresh random identity.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl FromStr for ProductId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CatalogError::invalid("product id must not be blank"));
        }
        let uuid = Uuid::parse_str(trimmed)
            .map_err(|_| CatalogError::invalid(format!("invalid product id format: {s}")))?;
        Ok(Self(uuid))
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// The catalog's aggregate root. Identity is fixed at construction; name,
/// description, price and stock change only through the dedicated methods
/// below.
#[derive(Clone, Debug)]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    price: Price,
    stock: Stock,
}

impl Product {
    /// Create a brand-new product with a generated identity.
    pub fn create(name: &str, description: &str, price: Price, stock: Stock) -> Result<Self> {
        let (name, description) = Self::validate_fields(name, description)?;
        Ok(Self {
            id: ProductId::generate(),
            name,
            description,
            price,
            stock,
        })
    }

    /// Rebuild a product from persisted state, keeping its stored identity.
    /// Applies the same field validation as `create`.
    pub fn reconstruct(
        id: ProductId,
        name: &str,
        description: &str,
        price: Price,
        stock: Stock,
    ) -> Result<Self> {
        let (name, description) = Self::validate_fields(name, description)?;
        Ok(Self {
            id,
            name,
            description,
            price,
            stock,
        })
    }

    fn validate_fields(name: &str, description: &str) -> Result<(String, String)> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CatalogError::invalid("product name must not be blank"));
        }
        let description = description.trim();
        if description.is_empty() {
            return Err(CatalogError::invalid(
                "product description must not be blank",
            ));
        }
        Ok((name.to_string(), description.to_string()))
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> &Price {
        &self.price
    }

    pub fn stock(&self) -> &Stock {
        &self.stock
    }

    /// Replace name and description together. Both are validated before
    /// either is assigned.
    pub fn update_product(&mut self, name: &str, description: &str) -> Result<()> {
        let (name, description) = Self::validate_fields(name, description)?;
        self.name = name;
        self.description = description;
        Ok(())
    }

    pub fn update_price(&mut self, new_price: Price) {
        self.price = new_price;
    }

    pub fn update_stock(&mut self, new_stock: Stock) {
        self.stock = new_stock;
    }

    /// Remove `quantity` units from stock (a sale). Fails on non-positive
    /// quantities and on insufficient stock, leaving the product unchanged.
    pub fn reduce_stock(&mut self, quantity: i64) -> Result<()> {
        if quantity <= 0 {
            return Err(CatalogError::invalid(
                "quantity to reduce must be positive",
            ));
        }
        self.stock = self.stock.reduce(quantity)?;
        Ok(())
    }

    /// Add `quantity` units to stock (a restock).
    pub fn add_stock(&mut self, quantity: i64) -> Result<()> {
        if quantity <= 0 {
            return Err(CatalogError::invalid("quantity to add must be positive"));
        }
        self.stock = self.stock.add(quantity)?;
        Ok(())
    }

    pub fn increase_price_by_percentage(&mut self, percentage: Decimal) -> Result<()> {
        self.price = self.price.increase_by_percentage(percentage)?;
        Ok(())
    }

    pub fn decrease_price_by_percentage(&mut self, percentage: Decimal) -> Result<()> {
        self.price = self.price.decrease_by_percentage(percentage)?;
        Ok(())
    }

    pub fn is_in_stock(&self) -> bool {
        !self.stock.is_out_of_stock()
    }

    pub fn has_enough_stock(&self, quantity: i64) -> Result<bool> {
        self.stock.has_enough(quantity)
    }
}

// Aggregate roots compare by identity, not by state.
impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Product {}

impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Currency;

    fn pen() -> Product {
        Product::create(
            "Pen",
            "Blue ink pen",
            Price::new(Decimal::new(1000, 2), Currency::Usd).unwrap(),
            Stock::new(5).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn create_rejects_blank_fields() {
        let price = Price::new(Decimal::from(10), Currency::Usd).unwrap();
        let stock = Stock::new(1).unwrap();
        let err = Product::create("  ", "desc", price, stock).unwrap_err();
        assert!(err.to_string().contains("name"));
        let err = Product::create("name", "  ", price, stock).unwrap_err();
        assert!(err.to_string().contains("description"));
    }

    #[test]
    fn create_trims_fields_and_generates_identity() {
        let price = Price::new(Decimal::from(10), Currency::Usd).unwrap();
        let stock = Stock::new(0).unwrap();
        let p = Product::create("  Pen  ", "  Blue ink pen  ", price, stock).unwrap();
        assert_eq!(p.name(), "Pen");
        assert_eq!(p.description(), "Blue ink pen");
        assert!(!p.is_in_stock());
    }

    #[test]
    fn reconstruct_keeps_identity() {
        let id = ProductId::generate();
        let price = Price::new(Decimal::from(10), Currency::Usd).unwrap();
        let p = Product::reconstruct(id, "Pen", "Blue ink pen", price, Stock::new(1).unwrap())
            .unwrap();
        assert_eq!(p.id(), id);
    }

    #[test]
    fn stock_lifecycle_scenario() {
        let mut p = pen();
        assert!(p.has_enough_stock(3).unwrap());
        assert!(!p.has_enough_stock(6).unwrap());

        p.reduce_stock(5).unwrap();
        assert!(!p.is_in_stock());

        let err = p.reduce_stock(1).unwrap_err();
        assert!(err.to_string().contains("insufficient stock"));
    }

    #[test]
    fn failed_update_leaves_fields_untouched() {
        let mut p = pen();
        assert!(p.update_product("New name", "   ").is_err());
        assert_eq!(p.name(), "Pen");
        assert_eq!(p.description(), "Blue ink pen");
    }

    #[test]
    fn non_positive_stock_adjustments_are_rejected() {
        let mut p = pen();
        assert!(p.reduce_stock(0).is_err());
        assert!(p.add_stock(0).is_err());
        assert!(p.add_stock(-3).is_err());
        p.add_stock(5).unwrap();
        assert_eq!(p.stock().quantity(), 10);
    }

    #[test]
    fn price_percentage_mutations() {
        let mut p = pen();
        p.increase_price_by_percentage(Decimal::from(10)).unwrap();
        assert_eq!(p.price().amount(), Decimal::new(1100, 2));
        assert!(p.increase_price_by_percentage(Decimal::from(-1)).is_err());
    }

    #[test]
    fn equality_is_identity_based() {
        let a = pen();
        let mut b = a.clone();
        b.update_product("Pencil", "Graphite pencil").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, pen());
    }

    #[test]
    fn product_id_parsing() {
        let id = ProductId::generate();
        let parsed: ProductId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
        assert!("".parse::<ProductId>().is_err());
        assert!("not-a-uuid".parse::<ProductId>().is_err());
    }
}
