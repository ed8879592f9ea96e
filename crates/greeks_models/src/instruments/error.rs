//! Contract validation errors.

use thiserror::Error;

/// Errors raised when a contract or market parameter set is invalid.
///
/// These fire at construction time, before any pricing engine is
/// involved, so a bad request never reaches the analytics.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ContractError {
    /// Strike must be positive and finite.
    #[error("invalid strike: K = {strike}")]
    InvalidStrike {
        /// The rejected strike value
        strike: f64,
    },

    /// Volatility must be positive and finite.
    #[error("invalid volatility: sigma = {volatility}")]
    InvalidVolatility {
        /// The rejected volatility value
        volatility: f64,
    },
}
