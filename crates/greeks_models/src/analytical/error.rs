//! Error types for the analytic pricing engine.

use greeks_core::market_data::MarketDataError;
use greeks_core::types::Date;
use thiserror::Error;

use crate::instruments::ContractError;

/// Errors raised when the analytic engine cannot evaluate an option.
///
/// Contract validation failures are wrapped rather than re-modelled so
/// callers can distinguish "the inputs were never valid" from "the
/// engine cannot price this market state".
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EngineError {
    /// The contract or market parameter set failed validation.
    #[error(transparent)]
    Contract(#[from] ContractError),

    /// A curve or surface lookup failed.
    #[error(transparent)]
    MarketData(#[from] MarketDataError),

    /// The exercise date is not after the valuation date.
    #[error("contract expired: expiry {expiry} is not after valuation date {valuation}")]
    ExpiredContract {
        /// Exercise date of the contract
        expiry: Date,
        /// Valuation date of the market set
        valuation: Date,
    },

    /// The spot quote is non-positive or not finite.
    #[error("invalid spot quote: S = {spot}")]
    InvalidSpot {
        /// The rejected spot value
        spot: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contract_error_is_transparent() {
        let err: EngineError = ContractError::InvalidStrike { strike: 0.0 }.into();
        assert_eq!(format!("{}", err), "invalid strike: K = 0");
    }

    #[test]
    fn expired_contract_display_names_both_dates() {
        let err = EngineError::ExpiredContract {
            expiry: Date::from_ymd(2020, 12, 15).unwrap(),
            valuation: Date::from_ymd(2021, 1, 1).unwrap(),
        };
        let shown = format!("{}", err);
        assert!(shown.contains("2020-12-15"));
        assert!(shown.contains("2021-01-01"));
    }

    #[test]
    fn market_data_error_converts() {
        let err: EngineError = MarketDataError::InvalidMaturity { t: -1.0 }.into();
        assert!(matches!(err, EngineError::MarketData(_)));
    }
}
