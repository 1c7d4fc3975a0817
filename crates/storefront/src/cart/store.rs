//! The cart store: owner of the canonical cart.

use mini_boutique_core::{
    CartState, CartTotals, Intent, LineItem, Price, ProductId, ProductSnapshot, TaxRate, reduce,
};
use tracing::instrument;

use super::persistence::{CartPersistence, CommitOutcome, LoadOutcome};
use crate::storage::KeyValueStore;

type Listener = Box<dyn FnMut(&CartState)>;

/// Owns the cart state and runs every change through the reducer.
///
/// On creation the store restores the saved cart, if any. After each
/// dispatched intent it saves the new items (the on-commit step) and then
/// notifies subscribers. Persistence problems are logged and recorded in
/// [`CartStore::load_outcome`] / [`CartStore::last_commit`]; they never fail a
/// dispatch or roll back the in-memory cart.
///
/// Dispatch takes `&mut self`, so intents are applied one at a time, each
/// completing its save before the next starts.
pub struct CartStore<S> {
    state: CartState,
    tax_rate: TaxRate,
    persistence: CartPersistence<S>,
    load_outcome: LoadOutcome,
    last_commit: CommitOutcome,
    listeners: Vec<Listener>,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Create a store over `storage`, restoring any saved cart.
    ///
    /// Unreadable or malformed saved data is logged and ignored; the cart
    /// then starts empty. Restoring does not write back to storage.
    pub fn open(storage: S, tax_rate: TaxRate) -> Self {
        let persistence = CartPersistence::new(storage);

        let (state, load_outcome) = match persistence.load() {
            Ok(Some(items)) => {
                let lines = items.len();
                tracing::info!(lines, "Restored saved cart");
                (
                    reduce(&CartState::new(), Intent::LoadCart(items)),
                    LoadOutcome::Restored { lines },
                )
            }
            Ok(None) => (CartState::new(), LoadOutcome::Absent),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load saved cart, starting empty");
                (
                    CartState::new(),
                    LoadOutcome::Discarded {
                        reason: e.to_string(),
                    },
                )
            }
        };

        Self {
            state,
            tax_rate,
            persistence,
            load_outcome,
            last_commit: CommitOutcome::NotAttempted,
            listeners: Vec::new(),
        }
    }

    /// Apply an intent, save the result, and notify subscribers.
    #[instrument(skip_all, fields(intent = intent.name()))]
    pub fn dispatch(&mut self, intent: Intent) {
        self.state = reduce(&self.state, intent);
        tracing::debug!(
            lines = self.state.len(),
            units = self.state.count(),
            "Cart updated"
        );
        self.commit();
        for listener in &mut self.listeners {
            listener(&self.state);
        }
    }

    /// Write the current items to storage, unconditionally.
    fn commit(&mut self) {
        self.last_commit = match self.persistence.save(self.state.items()) {
            Ok(()) => CommitOutcome::Saved,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to save cart");
                CommitOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        };
    }

    /// Add a product; `None` or `Some(0)` adds one unit.
    pub fn add_item(&mut self, product: ProductSnapshot, quantity: Option<u32>) {
        self.dispatch(Intent::AddItem { product, quantity });
    }

    pub fn remove_item(&mut self, id: ProductId) {
        self.dispatch(Intent::RemoveItem(id));
    }

    pub fn increment_item(&mut self, id: ProductId) {
        self.dispatch(Intent::Increment(id));
    }

    /// Lower a line's quantity by one. A line at one is left as is.
    pub fn decrement_item(&mut self, id: ProductId) {
        self.dispatch(Intent::Decrement(id));
    }

    pub fn clear_cart(&mut self) {
        self.dispatch(Intent::ClearCart);
    }

    /// Call `listener` with the new state after every dispatch.
    pub fn subscribe(&mut self, listener: impl FnMut(&CartState) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Current cart state.
    #[must_use]
    pub const fn state(&self) -> &CartState {
        &self.state
    }

    /// Current line items, in first-added order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        self.state.items()
    }

    /// Total units in the cart.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.state.count()
    }

    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.state.subtotal()
    }

    #[must_use]
    pub fn tax(&self) -> Price {
        self.state.tax(self.tax_rate)
    }

    #[must_use]
    pub fn total(&self) -> Price {
        self.state.total(self.tax_rate)
    }

    #[must_use]
    pub fn totals(&self) -> CartTotals {
        self.state.totals(self.tax_rate)
    }

    #[must_use]
    pub const fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    /// How the saved cart was handled when the store opened.
    #[must_use]
    pub const fn load_outcome(&self) -> &LoadOutcome {
        &self.load_outcome
    }

    /// Result of the most recent save.
    #[must_use]
    pub const fn last_commit(&self) -> &CommitOutcome {
        &self.last_commit
    }

    /// Borrow the underlying storage.
    #[must_use]
    pub const fn storage(&self) -> &S {
        self.persistence.storage()
    }

    /// Mutably borrow the underlying storage.
    pub const fn storage_mut(&mut self) -> &mut S {
        self.persistence.storage_mut()
    }

    /// Close the store, returning its storage.
    pub fn into_storage(self) -> S {
        self.persistence.into_storage()
    }
}

impl<S> std::fmt::Debug for CartStore<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("state", &self.state)
            .field("tax_rate", &self.tax_rate)
            .field("load_outcome", &self.load_outcome)
            .field("last_commit", &self.last_commit)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
