//! Persistent cart store.
//!
//! [`CartStore`] owns the canonical [`CartState`](mini_boutique_core::CartState),
//! applies intents through the pure reducer from `mini-boutique-core`, and
//! keeps a copy of the items in a [`KeyValueStore`](crate::storage::KeyValueStore)
//! so the cart survives restarts.

pub mod persistence;
mod store;

pub use persistence::{
    CART_STORAGE_KEY, CartPersistence, CommitOutcome, DecodeError, LoadError, LoadOutcome,
    SaveError, decode_items, encode_items,
};
pub use store::CartStore;
