//! Integration tests for Mini Boutique.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p mini-boutique-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_scenarios` - Cart store behavior over real storage adapters
//! - `property_tests` - Reducer and totals invariants over random intent sequences
//!
//! This library holds the fixtures both suites share.

use std::str::FromStr;

use mini_boutique_core::{Price, ProductId, ProductSnapshot};
use rust_decimal::Decimal;

/// A product snapshot with a price given as a decimal string.
///
/// # Panics
///
/// Panics if `price` is not a valid non-negative decimal.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn product(id: i32, title: &str, price: &str) -> ProductSnapshot {
    ProductSnapshot {
        id: ProductId::new(id),
        title: title.to_string(),
        price: Price::new(Decimal::from_str(price).unwrap()).unwrap(),
        image: format!("{}.png", title.to_lowercase()),
    }
}

/// Parse a decimal literal.
///
/// # Panics
///
/// Panics if `value` is not a valid decimal.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn dec(value: &str) -> Decimal {
    Decimal::from_str(value).unwrap()
}
