//! The cart aggregate.

use crate::cart::LineItem;
use crate::types::ProductId;

/// The cart's items in first-added order.
///
/// States are values: transitions build a new `CartState` through
/// [`reduce`](crate::cart::reduce) rather than mutating one in place, so two
/// states can be compared to detect a change and a state can be handed to
/// readers without exposing a mutable handle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartState {
    items: Vec<LineItem>,
}

impl CartState {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub(crate) const fn from_items(items: Vec<LineItem>) -> Self {
        Self { items }
    }

    /// The line items, in the order they were first added.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Look up the line for a product.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Number of distinct lines (not units; see [`CartState::count`]).
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consume the state, returning its items.
    #[must_use]
    pub fn into_items(self) -> Vec<LineItem> {
        self.items
    }
}
