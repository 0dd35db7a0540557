//! Product catalog and order intake microservices.
//!
//! Two binaries share this crate:
//! - `product-service`: REST CRUD over the product catalog, layered as
//!   domain / application / infrastructure / web.
//! - `order-service`: accepts an order payload and republishes it as an
//!   `order.created` event on NATS.
//!
//! The domain layer owns the invariants (price, stock, product identity);
//! everything else is an adapter around it.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod web;

pub use error::{CatalogError, Result};
