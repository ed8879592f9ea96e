//! Yield curve trait definition.

use crate::market_data::error::MarketDataError;

/// Generic yield curve for discount factor and rate lookups.
///
/// # Contract
///
/// - `discount_factor(t)` returns the discount factor D(t) for maturity t
/// - `zero_rate(t)` returns the continuously compounded zero rate r(t)
///
/// # Invariants
///
/// - D(0) = 1
/// - D(t) > 0 for all t >= 0
/// - D(t1) >= D(t2) for t1 <= t2 when rates are non-negative
///
/// # Example
///
/// ```
/// use greeks_core::market_data::{FlatForwardCurve, YieldCurve};
/// use greeks_core::types::{Date, DayCount};
///
/// let today = Date::from_ymd(2021, 1, 1).unwrap();
/// let curve = FlatForwardCurve::new(today, 0.05, DayCount::Act365Fixed);
///
/// let df = curve.discount_factor(1.0).unwrap();
/// assert!((df - (-0.05_f64).exp()).abs() < 1e-12);
/// ```
pub trait YieldCurve {
    /// Returns the discount factor for maturity `t` (years).
    ///
    /// # Errors
    /// `MarketDataError::InvalidMaturity` if `t < 0`.
    fn discount_factor(&self, t: f64) -> Result<f64, MarketDataError>;

    /// Returns the continuously compounded zero rate for maturity `t` (years).
    ///
    /// # Errors
    /// `MarketDataError::InvalidMaturity` if `t <= 0`.
    fn zero_rate(&self, t: f64) -> Result<f64, MarketDataError>;
}
