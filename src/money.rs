//! Money value type

use crate::currency::Currency;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An amount denominated in a single currency
///
/// Immutable value type. `times` and `divide` return new instances and
/// never touch the receiver; two moneys are equal when both amount and
/// currency are equal. Arithmetic follows IEEE 754, so dividing by zero
/// yields an infinite or NaN amount rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Money {
    amount: f64,
    currency: Currency,
}

impl Money {
    /// Create money from an amount and currency
    pub fn new(amount: f64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Zero amount in the given currency
    pub fn zero(currency: Currency) -> Self {
        Self::new(0.0, currency)
    }

    /// Get the amount
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Get the currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Multiply by a scalar, returning a new money in the same currency
    pub fn times(&self, multiplier: f64) -> Self {
        Self::new(self.amount * multiplier, self.currency)
    }

    /// Divide by a scalar, returning a new money in the same currency
    pub fn divide(&self, divisor: f64) -> Self {
        Self::new(self.amount / divisor, self.currency)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.amount, self.currency)
    }
}
