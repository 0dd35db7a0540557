//! Infrastructure layer: storage adapters.

pub mod postgres;

pub use postgres::PgProductRepository;
