//! Cart line items.

use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductId, ProductSnapshot, Quantity};

/// One product's presence in the cart.
///
/// `title`, `image`, and `price` are copied from the catalog when the item is
/// first added and are not refreshed by later adds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: ProductId,
    pub title: String,
    /// Per-unit price at add-time.
    pub price: Price,
    pub image: String,
    pub quantity: Quantity,
}

impl LineItem {
    /// Build a line item from a product snapshot.
    #[must_use]
    pub fn from_snapshot(snapshot: ProductSnapshot, quantity: Quantity) -> Self {
        Self {
            id: snapshot.id,
            title: snapshot.title,
            price: snapshot.price,
            image: snapshot.image,
            quantity,
        }
    }

    /// Price times quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price * self.quantity
    }
}
