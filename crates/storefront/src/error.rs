//! Unified storefront error type.
//!
//! Cart persistence problems never show up here: the cart store logs and
//! recovers from them. `StorefrontError` covers the failures a caller has to
//! act on, such as a bad configuration or an unknown product id.

use mini_boutique_core::ProductId;
use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The product catalog could not be loaded.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// No catalog product has this id.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;
