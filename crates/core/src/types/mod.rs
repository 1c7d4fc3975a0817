//! Core types for Mini Boutique.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod product;
pub mod quantity;

pub use id::*;
pub use price::{Price, PriceError};
pub use product::{Product, ProductSnapshot};
pub use quantity::Quantity;
