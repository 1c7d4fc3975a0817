//! Cart intents.

use crate::cart::LineItem;
use crate::types::{ProductId, ProductSnapshot};

/// A request to change the cart.
///
/// Each variant carries only the data its transition needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Add a product, merging into an existing line with the same id.
    ///
    /// A `quantity` of `None` or `Some(0)` adds one.
    AddItem {
        product: ProductSnapshot,
        quantity: Option<u32>,
    },
    /// Remove the line for this product.
    RemoveItem(ProductId),
    /// Raise a line's quantity by one.
    Increment(ProductId),
    /// Lower a line's quantity by one, stopping at one.
    Decrement(ProductId),
    /// Empty the cart.
    ClearCart,
    /// Replace every line, e.g. with items restored from storage.
    LoadCart(Vec<LineItem>),
}

impl Intent {
    /// Short name used in log fields.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AddItem { .. } => "add_item",
            Self::RemoveItem(_) => "remove_item",
            Self::Increment(_) => "increment",
            Self::Decrement(_) => "decrement",
            Self::ClearCart => "clear_cart",
            Self::LoadCart(_) => "load_cart",
        }
    }
}
