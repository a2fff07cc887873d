//! Currency conversion service

use crate::currency::{Currency, CurrencyPair};
use crate::error::{MonetaError, Result};
use crate::money::Money;
use crate::rates::{ExchangeRateTable, Rate};

/// Currency conversion service over an exchange rate table
///
/// Conversion is strictly one hop: the exact directional pair must be
/// registered. No inverse fallback, no multi-leg routing through a pivot
/// currency. Same-currency conversion always succeeds without a lookup.
///
/// Registration returns a new bank and leaves the receiver untouched.
///
/// # Example
/// ```
/// use moneta::bank::Bank;
/// use moneta::currency::Currency;
/// use moneta::money::Money;
///
/// let bank = Bank::with_exchange_rate(Currency::EUR, Currency::USD, 1.2);
///
/// let converted = bank.convert(Money::new(10.0, Currency::EUR), Currency::USD)?;
/// assert_eq!(converted, Money::new(12.0, Currency::USD));
/// # Ok::<(), moneta::error::MonetaError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bank {
    table: ExchangeRateTable,
}

impl Bank {
    /// Create a bank with no registered rates
    pub fn new() -> Self {
        Self {
            table: ExchangeRateTable::new(),
        }
    }

    /// Create a bank holding a single exchange rate
    pub fn with_exchange_rate(from: Currency, to: Currency, rate: Rate) -> Self {
        Self::new().add_exchange_rate(from, to, rate)
    }

    /// Return a new bank with the rate registered
    ///
    /// Re-registering a pair replaces its rate in the returned bank.
    pub fn add_exchange_rate(&self, from: Currency, to: Currency, rate: Rate) -> Self {
        let mut table = self.table.clone();
        table.insert(CurrencyPair::new(from, to), rate);
        Self { table }
    }

    /// Convert money into the target currency
    ///
    /// Converting into the money's own currency returns it unchanged even
    /// when the table is empty.
    pub fn convert(&self, money: Money, to: Currency) -> Result<Money> {
        if money.currency() == to {
            return Ok(money);
        }

        let pair = CurrencyPair::new(money.currency(), to);
        match self.table.rate(&pair) {
            Some(rate) => Ok(Money::new(money.amount() * rate, to)),
            None => Err(MonetaError::MissingRate(pair)),
        }
    }

    /// Whether a conversion between the two currencies would succeed
    pub fn can_convert(&self, from: Currency, to: Currency) -> bool {
        from == to || self.table.contains(&CurrencyPair::new(from, to))
    }

    /// Look up the registered rate for a direction, if any
    pub fn exchange_rate(&self, from: Currency, to: Currency) -> Option<Rate> {
        self.table.rate(&CurrencyPair::new(from, to))
    }

    /// Access the underlying rate table
    pub fn rates(&self) -> &ExchangeRateTable {
        &self.table
    }
}

impl From<ExchangeRateTable> for Bank {
    fn from(table: ExchangeRateTable) -> Self {
        Self { table }
    }
}
