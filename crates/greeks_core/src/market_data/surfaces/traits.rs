//! Volatility surface trait definition.

use crate::market_data::error::MarketDataError;

/// Generic Black volatility surface for implied volatility lookup.
///
/// # Contract
///
/// - `volatility(strike, expiry)` returns the implied volatility for the
///   given strike and time to expiry (years)
///
/// # Invariants
///
/// - sigma > 0 for all valid (strike, expiry) pairs
///
/// # Example
///
/// ```
/// use greeks_core::market_data::{ConstantVol, VolatilitySurface};
///
/// let surface = ConstantVol::new(0.10);
/// assert_eq!(surface.volatility(100.0, 1.0).unwrap(), 0.10);
/// ```
pub trait VolatilitySurface {
    /// Returns the implied volatility for the given strike and expiry.
    ///
    /// # Errors
    /// - `MarketDataError::InvalidStrike` if `strike <= 0`
    /// - `MarketDataError::InvalidExpiry` if `expiry <= 0`
    fn volatility(&self, strike: f64, expiry: f64) -> Result<f64, MarketDataError>;
}
