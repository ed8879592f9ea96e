//! Analytic European option engine (Black-Scholes-Merton).
//!
//! Prices European vanilla options with the closed-form formula and
//! reads NPV and first/second-order Greeks off the bound process.

use greeks_core::market_data::{VolatilitySurface, YieldCurve};

use super::black_scholes::{black_scholes_merton, GreekResults};
use super::error::EngineError;
use super::process::BlackScholesMertonProcess;
use crate::instruments::VanillaOption;

/// Analytic pricing engine for European vanilla options.
///
/// The engine holds a process; each `calculate` call reads the current
/// spot from the process's quote, so re-assigning the quote between
/// calls revalues the option at a new market state.
///
/// # Examples
/// ```
/// use greeks_core::market_data::{ConstantVol, FlatForwardCurve, SimpleQuote};
/// use greeks_core::types::{Date, DayCount};
/// use greeks_models::analytical::{AnalyticEuropeanEngine, BlackScholesMertonProcess};
/// use greeks_models::instruments::{OptionKind, VanillaOption};
///
/// let today = Date::from_ymd(2021, 1, 1).unwrap();
/// let expiry = Date::from_ymd(2021, 12, 15).unwrap();
/// let option = VanillaOption::european(OptionKind::Call, 100.0, expiry).unwrap();
///
/// let quote = SimpleQuote::new(100.0);
/// let process = BlackScholesMertonProcess::new(
///     &quote,
///     FlatForwardCurve::new(today, 0.01, DayCount::Act365Fixed),
///     FlatForwardCurve::new(today, 0.05, DayCount::Act365Fixed),
///     ConstantVol::new(0.10),
/// ).unwrap();
/// let engine = AnalyticEuropeanEngine::new(process);
///
/// let gamma = engine.gamma(&option).unwrap();
/// assert!(gamma > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct AnalyticEuropeanEngine<'a> {
    process: BlackScholesMertonProcess<'a>,
}

impl<'a> AnalyticEuropeanEngine<'a> {
    /// Attaches the engine to a Black-Scholes-Merton process.
    #[inline]
    pub fn new(process: BlackScholesMertonProcess<'a>) -> Self {
        Self { process }
    }

    /// Returns the bound process.
    #[inline]
    pub fn process(&self) -> &BlackScholesMertonProcess<'a> {
        &self.process
    }

    /// Evaluates price and Greeks at the current market state.
    ///
    /// The valuation date is the risk-free curve's reference date; time
    /// to expiry follows that curve's day count convention.
    ///
    /// # Errors
    /// - `EngineError::ExpiredContract` if expiry is not after the
    ///   valuation date
    /// - `EngineError::InvalidSpot` if the quote is non-positive or not
    ///   finite
    /// - `EngineError::MarketData` if a curve or surface lookup fails
    pub fn calculate(&self, option: &VanillaOption) -> Result<GreekResults, EngineError> {
        let risk_free = self.process.risk_free();
        let valuation = risk_free.reference_date();
        let expiry = option.expiry_date();
        let t = risk_free.time_from_reference(expiry);

        if t <= 0.0 {
            return Err(EngineError::ExpiredContract { expiry, valuation });
        }

        let spot = self.process.spot().value();
        if !(spot.is_finite() && spot > 0.0) {
            return Err(EngineError::InvalidSpot { spot });
        }

        let strike = option.strike();
        let sigma = self.process.volatility().volatility(strike, t)?;
        let r = risk_free.zero_rate(t)?;
        let q = self.process.dividend().zero_rate(t)?;

        Ok(black_scholes_merton(
            option.kind(),
            spot,
            strike,
            r,
            q,
            sigma,
            t,
        ))
    }

    /// Reads the option's present value at the current market state.
    pub fn npv(&self, option: &VanillaOption) -> Result<f64, EngineError> {
        self.calculate(option).map(|results| results.npv)
    }

    /// Reads the option's gamma at the current market state.
    pub fn gamma(&self, option: &VanillaOption) -> Result<f64, EngineError> {
        self.calculate(option).map(|results| results.gamma)
    }
}
