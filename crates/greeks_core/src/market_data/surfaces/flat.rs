//! Constant Black volatility surface.

use super::VolatilitySurface;
use crate::market_data::error::MarketDataError;

/// Constant Black volatility: the same implied volatility for every
/// strike and expiry. The flat/constant term structure the gamma
/// endpoint attaches to its process.
///
/// # Example
///
/// ```
/// use greeks_core::market_data::{ConstantVol, VolatilitySurface};
///
/// let surface = ConstantVol::new(0.10);
/// assert_eq!(surface.volatility(80.0, 0.5).unwrap(), 0.10);
/// assert_eq!(surface.volatility(120.0, 2.0).unwrap(), 0.10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantVol {
    sigma: f64,
}

impl ConstantVol {
    /// Constructs a constant volatility surface.
    ///
    /// Positivity of `sigma` is validated where the surface is bound to a
    /// process, so market sets can be assembled field by field.
    #[inline]
    pub fn new(sigma: f64) -> Self {
        Self { sigma }
    }

    /// Returns the constant volatility.
    #[inline]
    pub fn sigma(&self) -> f64 {
        self.sigma
    }
}

impl VolatilitySurface for ConstantVol {
    fn volatility(&self, strike: f64, expiry: f64) -> Result<f64, MarketDataError> {
        if strike <= 0.0 {
            return Err(MarketDataError::InvalidStrike { strike });
        }
        if expiry <= 0.0 {
            return Err(MarketDataError::InvalidExpiry { expiry });
        }
        Ok(self.sigma)
    }
}
