//! The cart aggregate and its state machine.
//!
//! A [`CartState`] is an immutable value. Every [`Intent`] is applied by
//! [`reduce`], which returns a new state and leaves the input untouched.
//! Totals are derived on demand from the state ([`CartState::totals`]) and
//! never stored on it.

pub mod intent;
pub mod item;
pub mod reducer;
pub mod state;
pub mod totals;

pub use intent::Intent;
pub use item::LineItem;
pub use reducer::reduce;
pub use state::CartState;
pub use totals::{CartTotals, TaxRate, TaxRateError};
