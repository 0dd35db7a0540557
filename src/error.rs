//! Error taxonomy shared across layers.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Failures a caller can see. `InvalidArgument` and `NotFound` are distinct
/// kinds so the web layer can map them to different status codes; storage
/// failures propagate unchanged, never retried here.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("product not found: {0}")]
    NotFound(String),

    #[error("storage error: {0}")]
    Storage(String),
}

impl CatalogError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn not_found(id: impl std::fmt::Display) -> Self {
        Self::NotFound(id.to_string())
    }
}
