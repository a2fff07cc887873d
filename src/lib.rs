//! # Moneta
//!
//! An immutable domain model for multi-currency money arithmetic.
//!
//! Moneta models money as value objects: a [`money::Money`] amount in one
//! currency, a [`bank::Bank`] converting between currencies over a table of
//! directed exchange rates, and a [`portfolio::Portfolio`] summing holdings
//! across currencies. Nothing mutates in place; every update returns a new
//! value, so instances can be shared freely.
//!
//! Conversion failures are values, not panics. A bank reports the missing
//! pair; a portfolio evaluation collects every missing pair before failing.
//!
//! ## Example
//!
//! ```rust
//! use moneta::prelude::*;
//!
//! let bank = Bank::with_exchange_rate(Currency::EUR, Currency::USD, 1.2)
//!     .add_exchange_rate(Currency::USD, Currency::KRW, 1100.0);
//!
//! let portfolio = Portfolio::new()
//!     .add(Money::new(5.0, Currency::USD))
//!     .add(Money::new(10.0, Currency::EUR));
//!
//! let total = portfolio.evaluate(&bank, Currency::USD)?;
//! assert_eq!(total, Money::new(17.0, Currency::USD));
//! # Ok::<(), MonetaError>(())
//! ```

pub mod bank;
pub mod currency;
pub mod error;
pub mod money;
pub mod portfolio;
pub mod rates;

pub mod prelude {
    //! Commonly used types
    pub use crate::bank::Bank;
    pub use crate::currency::{Currency, CurrencyPair};
    pub use crate::error::{MonetaError, Result};
    pub use crate::money::Money;
    pub use crate::portfolio::Portfolio;
    pub use crate::rates::{ExchangeRateTable, Rate};
}
