//! Application layer: DTO translation and use-case orchestration.

pub mod dtos;
pub mod service;
pub mod use_cases;

pub use service::ProductService;
