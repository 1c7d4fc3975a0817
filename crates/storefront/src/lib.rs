//! Mini Boutique Storefront library.
//!
//! Hosts the persistent cart store and the product catalog that front ends
//! (such as the `boutique` CLI) build on.
//!
//! # Modules
//!
//! - [`cart`] - The cart store and its persistence protocol
//! - [`catalog`] - Product catalog loading, search, filter, and sort
//! - [`config`] - Environment-based configuration
//! - [`storage`] - Key-value storage port and adapters
//! - [`state`] - Application state wiring the pieces together

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod state;
pub mod storage;

pub use cart::{CART_STORAGE_KEY, CartStore, CommitOutcome, LoadOutcome};
pub use catalog::{Catalog, CategoryFilter, ProductQuery, SortOrder};
pub use config::StorefrontConfig;
pub use error::StorefrontError;
pub use state::AppState;
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
