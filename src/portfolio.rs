//! Portfolio of money holdings across currencies

use crate::bank::Bank;
use crate::currency::{Currency, CurrencyPair};
use crate::error::{MonetaError, Result};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Ordered collection of money holdings
///
/// Holdings keep insertion order. The order does not change the evaluated
/// sum, but it fixes the order in which missing pairs are reported.
///
/// # Example
/// ```
/// use moneta::bank::Bank;
/// use moneta::currency::Currency;
/// use moneta::money::Money;
/// use moneta::portfolio::Portfolio;
///
/// let bank = Bank::with_exchange_rate(Currency::EUR, Currency::USD, 1.2);
/// let portfolio = Portfolio::new()
///     .add(Money::new(5.0, Currency::USD))
///     .add(Money::new(10.0, Currency::EUR));
///
/// let total = portfolio.evaluate(&bank, Currency::USD)?;
/// assert_eq!(total, Money::new(17.0, Currency::USD));
/// # Ok::<(), moneta::error::MonetaError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    moneys: Vec<Money>,
}

impl Portfolio {
    /// Create an empty portfolio
    pub fn new() -> Self {
        Self { moneys: Vec::new() }
    }

    /// Return a new portfolio with the money appended
    pub fn add(&self, money: Money) -> Self {
        let mut moneys = self.moneys.clone();
        moneys.push(money);
        Self { moneys }
    }

    /// Holdings in insertion order
    pub fn moneys(&self) -> &[Money] {
        &self.moneys
    }

    /// Number of holdings
    pub fn len(&self) -> usize {
        self.moneys.len()
    }

    /// Whether the portfolio holds nothing
    pub fn is_empty(&self) -> bool {
        self.moneys.is_empty()
    }

    /// Total value of all holdings in the target currency
    ///
    /// All-or-nothing: if any holding cannot be converted, the whole
    /// evaluation fails and the error lists every distinct missing pair in
    /// first-occurrence order. No partial sum is ever returned. An empty
    /// portfolio evaluates to zero in the target currency.
    pub fn evaluate(&self, bank: &Bank, to: Currency) -> Result<Money> {
        let mut total = 0.0;
        let mut missing: Vec<CurrencyPair> = Vec::new();

        for money in &self.moneys {
            match bank.convert(*money, to) {
                Ok(converted) => total += converted.amount(),
                Err(MonetaError::MissingRate(pair)) => {
                    if !missing.contains(&pair) {
                        missing.push(pair);
                    }
                }
                Err(other) => return Err(other),
            }
        }

        if missing.is_empty() {
            Ok(Money::new(total, to))
        } else {
            log::debug!(
                "Portfolio evaluation in {} failed: {} missing rate(s)",
                to,
                missing.len()
            );
            Err(MonetaError::MissingRates(missing))
        }
    }
}

impl From<Vec<Money>> for Portfolio {
    fn from(moneys: Vec<Money>) -> Self {
        Self { moneys }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_bank() -> Bank {
        Bank::with_exchange_rate(Currency::EUR, Currency::USD, 1.2)
            .add_exchange_rate(Currency::USD, Currency::KRW, 1100.0)
    }

    #[test]
    fn test_addition_in_same_currency() {
        let portfolio = Portfolio::new()
            .add(Money::new(5.0, Currency::USD))
            .add(Money::new(10.0, Currency::USD));

        let total = portfolio.evaluate(&Bank::new(), Currency::USD).unwrap();

        assert_eq!(total, Money::new(15.0, Currency::USD));
    }

    #[test]
    fn test_addition_of_dollars_and_euros() {
        let portfolio = Portfolio::new()
            .add(Money::new(5.0, Currency::USD))
            .add(Money::new(10.0, Currency::EUR));

        let total = portfolio.evaluate(&sample_bank(), Currency::USD).unwrap();

        assert_eq!(total, Money::new(17.0, Currency::USD));
    }

    #[test]
    fn test_addition_of_dollars_and_wons() {
        let portfolio = Portfolio::new()
            .add(Money::new(1.0, Currency::USD))
            .add(Money::new(1100.0, Currency::KRW));

        let total = portfolio.evaluate(&sample_bank(), Currency::KRW).unwrap();

        assert_eq!(total, Money::new(2200.0, Currency::KRW));
    }

    #[test]
    fn test_addition_with_missing_exchange_rate() {
        let portfolio = Portfolio::new()
            .add(Money::new(1.0, Currency::USD))
            .add(Money::new(1.0, Currency::EUR))
            .add(Money::new(1.0, Currency::KRW));

        let err = portfolio.evaluate(&sample_bank(), Currency::KRW).unwrap_err();

        assert_eq!(err.to_string(), "Missing exchange rate(s): [EUR->KRW]");
    }

    #[test]
    fn test_missing_pairs_reported_in_first_occurrence_order() {
        let portfolio = Portfolio::new()
            .add(Money::new(1.0, Currency::USD))
            .add(Money::new(1.0, Currency::EUR))
            .add(Money::new(1.0, Currency::KRW));

        let err = portfolio.evaluate(&Bank::new(), Currency::GBP).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Missing exchange rate(s): [USD->GBP,EUR->GBP,KRW->GBP]"
        );
    }

    #[test]
    fn test_missing_pairs_deduplicated() {
        let portfolio = Portfolio::new()
            .add(Money::new(1.0, Currency::EUR))
            .add(Money::new(2.0, Currency::EUR));

        let err = portfolio.evaluate(&Bank::new(), Currency::KRW).unwrap_err();

        assert_eq!(err.to_string(), "Missing exchange rate(s): [EUR->KRW]");
    }

    #[test]
    fn test_no_partial_sum_on_failure() {
        let bank = Bank::with_exchange_rate(Currency::USD, Currency::KRW, 1100.0);
        let portfolio = Portfolio::new()
            .add(Money::new(5.0, Currency::USD))
            .add(Money::new(10.0, Currency::EUR));

        let result = portfolio.evaluate(&bank, Currency::KRW);

        assert_eq!(
            result.unwrap_err(),
            MonetaError::MissingRates(vec![CurrencyPair::new(Currency::EUR, Currency::KRW)])
        );
    }

    #[test]
    fn test_empty_portfolio_evaluates_to_zero() {
        let portfolio = Portfolio::new();

        let total = portfolio.evaluate(&Bank::new(), Currency::KRW).unwrap();

        assert_eq!(total, Money::zero(Currency::KRW));
    }

    #[test]
    fn test_add_leaves_receiver_unchanged() {
        let portfolio = Portfolio::new().add(Money::new(5.0, Currency::USD));
        let bigger = portfolio.add(Money::new(10.0, Currency::EUR));

        assert_eq!(portfolio.len(), 1);
        assert_eq!(bigger.len(), 2);
    }

    #[test]
    fn test_from_vec_preserves_order() {
        let moneys = vec![
            Money::new(1.0, Currency::USD),
            Money::new(2.0, Currency::EUR),
        ];

        let portfolio = Portfolio::from(moneys.clone());

        assert_eq!(portfolio.moneys(), moneys.as_slice());
    }
}
