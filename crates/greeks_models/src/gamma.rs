//! Gamma profiles across a spot range.
//!
//! Builds the market set once, then sweeps the spot quote through the
//! requested grid, reading gamma at each point from the same engine.

use greeks_core::market_data::{ConstantVol, FlatForwardCurve, SimpleQuote};
use greeks_core::types::{Date, DayCount};
use serde::{Deserialize, Serialize};

use crate::analytical::{AnalyticEuropeanEngine, BlackScholesMertonProcess, EngineError};
use crate::instruments::VanillaOption;

/// Flat market parameters for a single-contract valuation.
///
/// When `valuation_date` is `None` the curves anchor at today's date,
/// so repeated runs drift as the calendar does; pin the date for
/// reproducible output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketParams {
    /// Anchor date for the curves; `None` means today.
    pub valuation_date: Option<Date>,
    /// Continuously compounded risk-free rate.
    pub risk_free_rate: f64,
    /// Continuously compounded dividend yield.
    pub dividend_yield: f64,
    /// Constant Black volatility.
    pub volatility: f64,
    /// Day count convention for year fractions.
    pub day_count: DayCount,
}

impl Default for MarketParams {
    fn default() -> Self {
        Self {
            valuation_date: None,
            risk_free_rate: 0.05,
            dividend_yield: 0.01,
            volatility: 0.10,
            day_count: DayCount::Act365Fixed,
        }
    }
}

impl MarketParams {
    /// Returns the effective valuation date, falling back to today.
    pub fn effective_valuation_date(&self) -> Date {
        self.valuation_date.unwrap_or_else(Date::today)
    }
}

/// Computes gamma of `option` at each spot in `spots`.
///
/// The output has the same length and order as `spots`; an empty input
/// yields an empty output. The quote, curves and engine are built once
/// and the quote is re-assigned per grid point, so the whole sweep
/// prices against one consistent market set.
///
/// # Errors
/// - `EngineError::Contract` if the volatility is non-positive or not
///   finite
/// - `EngineError::ExpiredContract` if the option's expiry is not after
///   the valuation date
/// - `EngineError::InvalidSpot` if a grid point is non-positive or not
///   finite
///
/// # Examples
/// ```
/// use greeks_core::types::Date;
/// use greeks_models::gamma::{compute_gamma_curve, MarketParams};
/// use greeks_models::instruments::{OptionKind, VanillaOption};
///
/// let expiry = Date::from_ymd(2021, 12, 15).unwrap();
/// let option = VanillaOption::european(OptionKind::Call, 100.0, expiry).unwrap();
/// let market = MarketParams {
///     valuation_date: Some(Date::from_ymd(2021, 1, 1).unwrap()),
///     ..MarketParams::default()
/// };
///
/// let spots: Vec<f64> = (80..=120).map(f64::from).collect();
/// let gammas = compute_gamma_curve(&option, &market, &spots).unwrap();
/// assert_eq!(gammas.len(), spots.len());
/// assert!(gammas.iter().all(|&g| g >= 0.0));
/// ```
pub fn compute_gamma_curve(
    option: &VanillaOption,
    market: &MarketParams,
    spots: &[f64],
) -> Result<Vec<f64>, EngineError> {
    let valuation = market.effective_valuation_date();

    let quote = SimpleQuote::new(option.strike());
    let dividend = FlatForwardCurve::new(valuation, market.dividend_yield, market.day_count);
    let risk_free = FlatForwardCurve::new(valuation, market.risk_free_rate, market.day_count);
    let volatility = ConstantVol::new(market.volatility);

    let process = BlackScholesMertonProcess::new(&quote, dividend, risk_free, volatility)?;
    let engine = AnalyticEuropeanEngine::new(process);

    let mut gammas = Vec::with_capacity(spots.len());
    for &spot in spots {
        quote.set_value(spot);
        gammas.push(engine.gamma(option)?);
    }
    Ok(gammas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use greeks_core::types::Date;
    use crate::instruments::OptionKind;

    fn pinned_market() -> MarketParams {
        MarketParams {
            valuation_date: Some(Date::from_ymd(2021, 1, 1).unwrap()),
            ..MarketParams::default()
        }
    }

    fn reference_option() -> VanillaOption {
        let expiry = Date::from_ymd(2021, 12, 15).unwrap();
        VanillaOption::european(OptionKind::Call, 100.0, expiry).unwrap()
    }

    fn spot_grid() -> Vec<f64> {
        (80..=120).map(f64::from).collect()
    }

    #[test]
    fn test_output_matches_input_length_and_order() {
        let gammas =
            compute_gamma_curve(&reference_option(), &pinned_market(), &spot_grid()).unwrap();
        assert_eq!(gammas.len(), 41);
    }

    #[test]
    fn test_empty_grid_yields_empty_curve() {
        let gammas = compute_gamma_curve(&reference_option(), &pinned_market(), &[]).unwrap();
        assert!(gammas.is_empty());
    }

    #[test]
    fn test_all_gammas_non_negative() {
        let gammas =
            compute_gamma_curve(&reference_option(), &pinned_market(), &spot_grid()).unwrap();
        assert!(gammas.iter().all(|&g| g >= 0.0));
    }

    #[test]
    fn test_reference_value_at_the_strike() {
        let spots = spot_grid();
        let gammas = compute_gamma_curve(&reference_option(), &pinned_market(), &spots).unwrap();
        let at_strike = spots.iter().position(|&s| s == 100.0).unwrap();
        assert_relative_eq!(gammas[at_strike], 0.036745, epsilon = 1e-4);
    }

    #[test]
    fn test_curve_is_unimodal_with_peak_below_the_strike() {
        let spots = spot_grid();
        let gammas = compute_gamma_curve(&reference_option(), &pinned_market(), &spots).unwrap();

        let peak = gammas
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| i)
            .unwrap();

        // Lognormal gamma peaks a little below the strike
        assert!(
            (90.0..=100.0).contains(&spots[peak]),
            "peak at spot {}",
            spots[peak]
        );
        assert!(gammas[..peak].windows(2).all(|w| w[0] <= w[1]));
        assert!(gammas[peak..].windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_deterministic_with_pinned_valuation_date() {
        let spots = spot_grid();
        let first = compute_gamma_curve(&reference_option(), &pinned_market(), &spots).unwrap();
        let second = compute_gamma_curve(&reference_option(), &pinned_market(), &spots).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_expired_option_is_an_error() {
        let expiry = Date::from_ymd(2020, 6, 1).unwrap();
        let option = VanillaOption::european(OptionKind::Call, 100.0, expiry).unwrap();
        assert!(matches!(
            compute_gamma_curve(&option, &pinned_market(), &spot_grid()),
            Err(EngineError::ExpiredContract { .. })
        ));
    }

    #[test]
    fn test_invalid_volatility_is_an_error() {
        let market = MarketParams {
            volatility: 0.0,
            ..pinned_market()
        };
        assert!(matches!(
            compute_gamma_curve(&reference_option(), &market, &spot_grid()),
            Err(EngineError::Contract(_))
        ));
    }

    #[test]
    fn test_invalid_grid_point_is_an_error() {
        let err = compute_gamma_curve(&reference_option(), &pinned_market(), &[100.0, -5.0])
            .unwrap_err();
        assert_eq!(err, EngineError::InvalidSpot { spot: -5.0 });
    }

    #[test]
    fn test_default_market_matches_flat_parameter_set() {
        let market = MarketParams::default();
        assert_eq!(market.risk_free_rate, 0.05);
        assert_eq!(market.dividend_yield, 0.01);
        assert_eq!(market.volatility, 0.10);
        assert_eq!(market.day_count, DayCount::Act365Fixed);
        assert!(market.valuation_date.is_none());
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn curve_length_is_preserved(n in 0_usize..64) {
                let spots: Vec<f64> = (0..n).map(|i| 50.0 + i as f64).collect();
                let gammas =
                    compute_gamma_curve(&reference_option(), &pinned_market(), &spots).unwrap();
                prop_assert_eq!(gammas.len(), spots.len());
            }
        }
    }
}
