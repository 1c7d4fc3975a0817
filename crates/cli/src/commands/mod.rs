//! Command output rendering.
//!
//! Each function returns the text a command prints, so output can be tested
//! without capturing stdout.

pub mod cart;
pub mod products;
