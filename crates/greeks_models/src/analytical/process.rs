//! Black-Scholes-Merton process: the market state an engine observes.

use greeks_core::market_data::{ConstantVol, FlatForwardCurve, SimpleQuote};

use crate::instruments::ContractError;

/// Market state for lognormal dynamics: a spot quote, dividend and
/// risk-free flat curves, and a constant Black volatility.
///
/// The process borrows the spot quote rather than owning it, so the
/// caller can re-assign the quote between engine reads and revalue the
/// same contract across a range of spots. Curves and volatility are
/// immutable per request.
///
/// # Examples
/// ```
/// use greeks_core::market_data::{ConstantVol, FlatForwardCurve, SimpleQuote};
/// use greeks_core::types::{Date, DayCount};
/// use greeks_models::analytical::BlackScholesMertonProcess;
///
/// let today = Date::from_ymd(2021, 1, 1).unwrap();
/// let quote = SimpleQuote::new(110.0);
/// let process = BlackScholesMertonProcess::new(
///     &quote,
///     FlatForwardCurve::new(today, 0.01, DayCount::Act365Fixed),
///     FlatForwardCurve::new(today, 0.05, DayCount::Act365Fixed),
///     ConstantVol::new(0.10),
/// ).unwrap();
///
/// quote.set_value(95.0);
/// assert_eq!(process.spot().value(), 95.0);
/// ```
#[derive(Debug, Clone)]
pub struct BlackScholesMertonProcess<'a> {
    spot: &'a SimpleQuote,
    dividend: FlatForwardCurve,
    risk_free: FlatForwardCurve,
    volatility: ConstantVol,
}

impl<'a> BlackScholesMertonProcess<'a> {
    /// Binds a process from (quote, dividend curve, risk-free curve,
    /// volatility).
    ///
    /// # Errors
    /// `ContractError::InvalidVolatility` if the constant volatility is
    /// non-positive or not finite.
    pub fn new(
        spot: &'a SimpleQuote,
        dividend: FlatForwardCurve,
        risk_free: FlatForwardCurve,
        volatility: ConstantVol,
    ) -> Result<Self, ContractError> {
        let sigma = volatility.sigma();
        if !(sigma.is_finite() && sigma > 0.0) {
            return Err(ContractError::InvalidVolatility { volatility: sigma });
        }
        Ok(Self {
            spot,
            dividend,
            risk_free,
            volatility,
        })
    }

    /// Returns the spot quote handle.
    #[inline]
    pub fn spot(&self) -> &SimpleQuote {
        self.spot
    }

    /// Returns the dividend yield curve.
    #[inline]
    pub fn dividend(&self) -> &FlatForwardCurve {
        &self.dividend
    }

    /// Returns the risk-free curve.
    #[inline]
    pub fn risk_free(&self) -> &FlatForwardCurve {
        &self.risk_free
    }

    /// Returns the Black volatility surface.
    #[inline]
    pub fn volatility(&self) -> &ConstantVol {
        &self.volatility
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use greeks_core::types::{Date, DayCount};

    fn today() -> Date {
        Date::from_ymd(2021, 1, 1).unwrap()
    }

    fn flat(rate: f64) -> FlatForwardCurve {
        FlatForwardCurve::new(today(), rate, DayCount::Act365Fixed)
    }

    #[test]
    fn test_construction_with_valid_vol() {
        let quote = SimpleQuote::new(100.0);
        let process =
            BlackScholesMertonProcess::new(&quote, flat(0.01), flat(0.05), ConstantVol::new(0.10));
        assert!(process.is_ok());
    }

    #[test]
    fn test_non_positive_vol_rejected() {
        let quote = SimpleQuote::new(100.0);
        for sigma in [0.0, -0.1] {
            let result = BlackScholesMertonProcess::new(
                &quote,
                flat(0.01),
                flat(0.05),
                ConstantVol::new(sigma),
            );
            assert_eq!(
                result.unwrap_err(),
                ContractError::InvalidVolatility { volatility: sigma }
            );
        }
    }

    #[test]
    fn test_nan_vol_rejected() {
        let quote = SimpleQuote::new(100.0);
        let result = BlackScholesMertonProcess::new(
            &quote,
            flat(0.01),
            flat(0.05),
            ConstantVol::new(f64::NAN),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_process_observes_quote_updates() {
        let quote = SimpleQuote::new(100.0);
        let process =
            BlackScholesMertonProcess::new(&quote, flat(0.01), flat(0.05), ConstantVol::new(0.10))
                .unwrap();

        quote.set_value(80.0);
        assert_eq!(process.spot().value(), 80.0);
        quote.set_value(120.0);
        assert_eq!(process.spot().value(), 120.0);
    }
}
