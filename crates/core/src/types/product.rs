//! Catalog products.

use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductId};

/// A product record from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: Price,
    /// Image URL or path.
    pub image: String,
    pub description: String,
    pub category: String,
}

impl Product {
    /// Capture the fields a cart line keeps from this product.
    #[must_use]
    pub fn snapshot(&self) -> ProductSnapshot {
        ProductSnapshot {
            id: self.id,
            title: self.title.clone(),
            price: self.price,
            image: self.image.clone(),
        }
    }
}

/// The subset of a product copied into the cart at add-time.
///
/// Later catalog changes do not reach items already in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    pub id: ProductId,
    pub title: String,
    pub price: Price,
    pub image: String,
}
