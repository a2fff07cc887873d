//! Error types for moneta

use crate::currency::CurrencyPair;
use thiserror::Error;

/// Main error type for moneta
///
/// Conversion failures carry the directional pair they concern; the pair
/// renders as the canonical `"<FROM>-><TO>"` key (e.g. `"EUR->KRW"`).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MonetaError {
    /// No directional rate registered for the pair. Raised by
    /// `Bank::convert`; rates are one-way, so the inverse direction does
    /// not satisfy a lookup.
    #[error("Missing exchange rate: {0}")]
    MissingRate(CurrencyPair),

    /// One or more portfolio items could not be converted. Raised by
    /// `Portfolio::evaluate`; aggregates every distinct missing pair in
    /// first-occurrence order, not just the first failure.
    #[error("Missing exchange rate(s): [{}]", join_keys(.0))]
    MissingRates(Vec<CurrencyPair>),

    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    #[error("Invalid rate data: {0}")]
    InvalidData(String),
}

/// Result type alias for moneta operations
pub type Result<T> = std::result::Result<T, MonetaError>;

fn join_keys(pairs: &[CurrencyPair]) -> String {
    pairs
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
