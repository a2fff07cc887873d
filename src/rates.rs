//! Exchange rate table storage
//!
//! Rates are directional multipliers keyed by `CurrencyPair`. Registering
//! EUR->USD says nothing about USD->EUR; callers wanting both directions
//! register both.

use crate::currency::{Currency, CurrencyPair};
use crate::error::{MonetaError, Result};
use serde::Deserialize;
use std::collections::HashMap;

/// Exchange rate as a multiplier on the source amount
pub type Rate = f64;

#[derive(Debug, Deserialize)]
struct RateRow {
    from: String,
    to: String,
    rate: f64,
}

/// In-memory table of directional exchange rates
///
/// # Example
/// ```
/// use moneta::currency::{Currency, CurrencyPair};
/// use moneta::rates::ExchangeRateTable;
///
/// let mut table = ExchangeRateTable::new();
/// table.insert(CurrencyPair::new(Currency::EUR, Currency::USD), 1.2);
///
/// let pair = CurrencyPair::new(Currency::EUR, Currency::USD);
/// assert_eq!(table.rate(&pair), Some(1.2));
/// assert_eq!(table.rate(&pair.inverse()), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExchangeRateTable {
    rates: HashMap<CurrencyPair, Rate>,
}

impl ExchangeRateTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            rates: HashMap::new(),
        }
    }

    /// Build a table from CSV data
    ///
    /// Expected format: `from,to,rate` with a header row.
    pub fn from_csv(csv_text: &str) -> Result<Self> {
        let mut table = Self::new();
        table.load_csv(csv_text)?;
        Ok(table)
    }

    /// Load rates from CSV data into this table, returning the row count
    ///
    /// Later rows overwrite earlier ones for the same pair. File data is
    /// untrusted, so rates must be positive and finite here even though
    /// `insert` does not check. The whole input is validated before any
    /// row is inserted; a failed load leaves the table unchanged.
    pub fn load_csv(&mut self, csv_text: &str) -> Result<usize> {
        let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
        let mut entries = Vec::new();

        for result in reader.deserialize() {
            let row: RateRow = result
                .map_err(|e| MonetaError::InvalidData(format!("CSV parse error: {}", e)))?;

            let from: Currency = row.from.parse()?;
            let to: Currency = row.to.parse()?;

            if !row.rate.is_finite() || row.rate <= 0.0 {
                return Err(MonetaError::InvalidData(format!(
                    "Exchange rate must be positive and finite, got {} for {}",
                    row.rate,
                    CurrencyPair::new(from, to)
                )));
            }

            entries.push((CurrencyPair::new(from, to), row.rate));
        }

        let count = entries.len();
        for (pair, rate) in entries {
            self.rates.insert(pair, rate);
        }

        Ok(count)
    }

    /// Register a rate, returning the previous rate for the pair if any
    pub fn insert(&mut self, pair: CurrencyPair, rate: Rate) -> Option<Rate> {
        self.rates.insert(pair, rate)
    }

    /// Look up the rate for a directional pair
    pub fn rate(&self, pair: &CurrencyPair) -> Option<Rate> {
        self.rates.get(pair).copied()
    }

    /// Whether a rate is registered for the pair
    pub fn contains(&self, pair: &CurrencyPair) -> bool {
        self.rates.contains_key(pair)
    }

    /// Number of registered pairs
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Whether the table holds no rates
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Iterate over registered pairs and their rates
    pub fn iter(&self) -> impl Iterator<Item = (&CurrencyPair, &Rate)> {
        self.rates.iter()
    }
}
