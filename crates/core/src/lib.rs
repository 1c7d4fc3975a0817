//! Mini Boutique Core - Cart state machine and shared types.
//!
//! This crate provides the pieces of the storefront that have no I/O:
//! - Product identifiers, prices, and quantities
//! - The cart aggregate (`CartState`) and its line items
//! - The pure transition function over cart intents
//! - Derived totals (count, subtotal, tax, total)
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no storage, no
//! logging, no clocks. Persistence and the store that owns the canonical
//! cart live in `mini-boutique-storefront`.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for product ids, prices, quantities, and catalog products
//! - [`cart`] - Line items, cart state, intents, the reducer, and totals

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod types;

pub use cart::{CartState, CartTotals, Intent, LineItem, TaxRate, TaxRateError, reduce};
pub use types::*;
