//! Derived cart figures.
//!
//! Everything here is computed from a [`CartState`] on request. Sums are kept
//! exact; rounding is left to display code.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cart::CartState;
use crate::types::Price;

/// Errors constructing a [`TaxRate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaxRateError {
    #[error("tax rate must not be negative (got {0})")]
    Negative(Decimal),
    #[error("invalid tax rate: {0}")]
    Invalid(String),
}

/// A sales tax rate applied multiplicatively to the subtotal (0.08 = 8%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct TaxRate(Decimal);

impl TaxRate {
    /// The storefront's standard rate of 8%.
    pub const DEFAULT: Self = Self(Decimal::from_parts(8, 0, 0, false, 2));

    /// Create a tax rate.
    ///
    /// # Errors
    ///
    /// Returns `TaxRateError::Negative` for rates below zero.
    pub fn new(rate: Decimal) -> Result<Self, TaxRateError> {
        if rate.is_sign_negative() && !rate.is_zero() {
            return Err(TaxRateError::Negative(rate));
        }
        Ok(Self(rate))
    }

    /// The multiplier.
    #[must_use]
    pub const fn rate(&self) -> Decimal {
        self.0
    }

    /// The rate as a percentage (0.08 -> 8).
    #[must_use]
    pub fn percent(&self) -> Decimal {
        (self.0 * Decimal::ONE_HUNDRED).normalize()
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<Decimal> for TaxRate {
    type Error = TaxRateError;

    fn try_from(rate: Decimal) -> Result<Self, Self::Error> {
        Self::new(rate)
    }
}

impl From<TaxRate> for Decimal {
    fn from(rate: TaxRate) -> Self {
        rate.0
    }
}

impl FromStr for TaxRate {
    type Err = TaxRateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rate = Decimal::from_str(s.trim()).map_err(|e| TaxRateError::Invalid(e.to_string()))?;
        Self::new(rate)
    }
}

impl std::fmt::Display for TaxRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

/// A snapshot of every derived figure, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartTotals {
    /// Total units across all lines.
    pub count: u64,
    pub subtotal: Price,
    pub tax: Price,
    pub total: Price,
}

impl CartState {
    /// Total units in the cart (sum of quantities).
    #[must_use]
    pub fn count(&self) -> u64 {
        self.items()
            .iter()
            .map(|item| u64::from(item.quantity.get()))
            .sum()
    }

    /// Sum of price times quantity over every line, unrounded.
    ///
    /// Saturates at [`Decimal::MAX`].
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.items().iter().map(super::LineItem::line_total).sum()
    }

    /// The subtotal, or `None` if a line total or the sum overflows.
    #[must_use]
    pub fn checked_subtotal(&self) -> Option<Price> {
        self.items().iter().try_fold(Price::ZERO, |sum, item| {
            sum.checked_add(item.price.checked_mul(item.quantity)?)
        })
    }

    /// Tax owed on the subtotal.
    #[must_use]
    pub fn tax(&self, rate: TaxRate) -> Price {
        self.subtotal().scale(rate.rate())
    }

    /// Subtotal plus tax.
    #[must_use]
    pub fn total(&self, rate: TaxRate) -> Price {
        let subtotal = self.subtotal();
        subtotal + subtotal.scale(rate.rate())
    }

    /// Every derived figure at once.
    #[must_use]
    pub fn totals(&self, rate: TaxRate) -> CartTotals {
        let subtotal = self.subtotal();
        let tax = subtotal.scale(rate.rate());
        CartTotals {
            count: self.count(),
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }
}
