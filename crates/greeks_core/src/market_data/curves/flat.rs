//! Flat-forward yield curve.

use super::YieldCurve;
use crate::market_data::error::MarketDataError;
use crate::types::{Date, DayCount};

/// Flat-forward yield curve: one continuously compounded rate for all
/// maturities, anchored at a reference date with a day count convention.
///
/// This is the term structure the gamma endpoint builds for both the
/// risk-free and the dividend legs of the process.
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
/// assert_eq!(curve.zero_rate(1.0).unwrap(), 0.05);
/// assert_eq!(curve.zero_rate(5.0).unwrap(), 0.05);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatForwardCurve {
    reference_date: Date,
    rate: f64,
    day_count: DayCount,
}

impl FlatForwardCurve {
    /// Constructs a flat curve from (reference date, rate, day count).
    ///
    /// Negative rates are valid; they occur in real markets.
    pub fn new(reference_date: Date, rate: f64, day_count: DayCount) -> Self {
        Self {
            reference_date,
            rate,
            day_count,
        }
    }

    /// Returns the curve's reference date.
    #[inline]
    pub fn reference_date(&self) -> Date {
        self.reference_date
    }

    /// Returns the constant rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the day count convention.
    #[inline]
    pub fn day_count(&self) -> DayCount {
        self.day_count
    }

    /// Year fraction from the reference date to `date` under the curve's
    /// day count. Negative if `date` precedes the reference date.
    pub fn time_from_reference(&self, date: Date) -> f64 {
        self.day_count.year_fraction(self.reference_date, date)
    }
}

impl YieldCurve for FlatForwardCurve {
    /// D(t) = exp(-r * t)
    fn discount_factor(&self, t: f64) -> Result<f64, MarketDataError> {
        if t < 0.0 {
            return Err(MarketDataError::InvalidMaturity { t });
        }
        Ok((-self.rate * t).exp())
    }

    /// The zero rate of a flat curve is the constant rate.
    fn zero_rate(&self, t: f64) -> Result<f64, MarketDataError> {
        if t <= 0.0 {
            return Err(MarketDataError::InvalidMaturity { t });
        }
        Ok(self.rate)
    }
}
