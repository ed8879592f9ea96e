//! Black-Scholes-Merton closed form for European options.
//!
//! ## Mathematical Formulas
//!
//! **Call**: C = S e^(-qT) N(d1) - K e^(-rT) N(d2)
//! **Put**:  P = K e^(-rT) N(-d2) - S e^(-qT) N(-d1)
//!
//! where d1 = (ln(S/K) + (r - q + sigma^2/2) T) / (sigma sqrt(T)) and
//! d2 = d1 - sigma sqrt(T).

use super::distributions::{norm_cdf, norm_pdf};
use crate::instruments::OptionKind;

/// Price and first/second-order Greeks from one closed-form evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GreekResults {
    /// Present value of the option.
    pub npv: f64,
    /// dV/dS
    pub delta: f64,
    /// d2V/dS2 (identical for calls and puts)
    pub gamma: f64,
    /// dV/dsigma, per 1.0 absolute vol move
    pub vega: f64,
    /// dV/dt, per year
    pub theta: f64,
    /// dV/dr, per 1.0 rate shift
    pub rho: f64,
}

/// Evaluates the Black-Scholes-Merton closed form.
///
/// # Arguments
/// * `kind` - Call or put
/// * `spot` - Current underlying price S (must be positive)
/// * `strike` - Strike K (must be positive)
/// * `rate` - Continuously compounded risk-free rate r
/// * `dividend_yield` - Continuously compounded dividend yield q
/// * `volatility` - Black volatility sigma (must be positive)
/// * `expiry` - Time to expiry T in years
///
/// At `expiry <= 0` the option is worth its intrinsic value and all
/// sensitivities are zero; callers wanting an error for expired
/// contracts check before calling (the engine does).
///
/// # Examples
/// ```
/// use greeks_models::analytical::black_scholes_merton;
/// use greeks_models::instruments::OptionKind;
///
/// // S=100, K=100, r=5%, q=0, sigma=20%, T=1: C ~ 10.45
/// let results = black_scholes_merton(OptionKind::Call, 100.0, 100.0, 0.05, 0.0, 0.20, 1.0);
/// assert!((results.npv - 10.4506).abs() < 0.01);
/// assert!(results.gamma > 0.0);
/// ```
pub fn black_scholes_merton(
    kind: OptionKind,
    spot: f64,
    strike: f64,
    rate: f64,
    dividend_yield: f64,
    volatility: f64,
    expiry: f64,
) -> GreekResults {
    let phi = kind.sign();

    if expiry <= 0.0 {
        return GreekResults {
            npv: (phi * (spot - strike)).max(0.0),
            delta: 0.0,
            gamma: 0.0,
            vega: 0.0,
            theta: 0.0,
            rho: 0.0,
        };
    }

    let t = expiry;
    let r = rate;
    let q = dividend_yield;
    let sigma = volatility;
    let sqrt_t = t.sqrt();
    let std_dev = sigma * sqrt_t;
    let df_r = (-r * t).exp();
    let df_q = (-q * t).exp();
    let forward = spot * ((r - q) * t).exp();

    let (d1, d2) = if std_dev > 1e-15 {
        let d1 = ((spot / strike).ln() + (r - q + 0.5 * sigma * sigma) * t) / std_dev;
        (d1, d1 - std_dev)
    } else {
        // Degenerate vol: the terminal distribution collapses onto the forward
        let big = if forward > strike { 1e15 } else { -1e15 };
        (big, big)
    };

    let nd1 = norm_cdf(phi * d1);
    let nd2 = norm_cdf(phi * d2);
    let npd1 = norm_pdf(d1);

    let npv = phi * (spot * df_q * nd1 - strike * df_r * nd2);
    let delta = phi * df_q * nd1;
    let gamma = df_q * npd1 / (spot * std_dev);
    let vega = spot * df_q * npd1 * sqrt_t;
    let theta = {
        let decay = -(spot * df_q * npd1 * sigma) / (2.0 * sqrt_t);
        decay - phi * r * strike * df_r * nd2 + phi * q * spot * df_q * nd1
    };
    let rho = phi * strike * t * df_r * nd2;

    GreekResults {
        npv,
        delta,
        gamma,
        vega,
        theta,
        rho,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_atm_call_reference_price() {
        // Classic textbook case: S=100, K=100, r=5%, q=0, sigma=20%, T=1
        let results = black_scholes_merton(OptionKind::Call, 100.0, 100.0, 0.05, 0.0, 0.20, 1.0);
        assert_relative_eq!(results.npv, 10.4506, epsilon = 1e-2);
        assert!(results.delta > 0.5 && results.delta < 0.8);
        assert!(results.rho > 0.0);
    }

    #[test]
    fn test_put_call_parity() {
        // C - P = S e^(-qT) - K e^(-rT)
        let (s, k, r, q, sigma, t) = (105.0, 100.0, 0.05, 0.01, 0.25, 0.75);
        let call = black_scholes_merton(OptionKind::Call, s, k, r, q, sigma, t);
        let put = black_scholes_merton(OptionKind::Put, s, k, r, q, sigma, t);

        let parity = s * (-q * t).exp() - k * (-r * t).exp();
        assert_relative_eq!(call.npv - put.npv, parity, epsilon = 1e-6);
    }

    #[test]
    fn test_gamma_matches_closed_form() {
        // Spec literals: S=100, K=100, r=5%, q=1%, sigma=10%, T=348/365
        let t: f64 = 348.0 / 365.0;
        let results = black_scholes_merton(OptionKind::Call, 100.0, 100.0, 0.05, 0.01, 0.10, t);

        let std_dev = 0.10 * t.sqrt();
        let d1 = ((0.05 - 0.01 + 0.005) * t) / std_dev;
        let expected = (-0.01 * t).exp() * norm_pdf(d1) / (100.0 * std_dev);

        assert_relative_eq!(results.gamma, expected, epsilon = 1e-12);
        // Order of magnitude for an ATM ~1y 10%-vol call
        assert!(results.gamma > 0.01 && results.gamma < 0.05);
        assert_relative_eq!(results.gamma, 0.036745, epsilon = 1e-4);
    }

    #[test]
    fn test_gamma_same_for_call_and_put() {
        let call = black_scholes_merton(OptionKind::Call, 95.0, 100.0, 0.05, 0.01, 0.10, 1.0);
        let put = black_scholes_merton(OptionKind::Put, 95.0, 100.0, 0.05, 0.01, 0.10, 1.0);
        assert_relative_eq!(call.gamma, put.gamma, epsilon = 1e-12);
    }

    #[test]
    fn test_gamma_matches_numerical_second_derivative() {
        let h = 1e-3;
        let price = |s: f64| {
            black_scholes_merton(OptionKind::Call, s, 100.0, 0.05, 0.01, 0.10, 1.0).npv
        };
        let numeric = (price(100.0 + h) - 2.0 * price(100.0) + price(100.0 - h)) / (h * h);
        let analytic = black_scholes_merton(OptionKind::Call, 100.0, 100.0, 0.05, 0.01, 0.10, 1.0);
        assert_relative_eq!(numeric, analytic.gamma, epsilon = 1e-3);
    }

    #[test]
    fn test_expired_option_returns_intrinsic() {
        let itm = black_scholes_merton(OptionKind::Call, 110.0, 100.0, 0.05, 0.01, 0.10, 0.0);
        assert_eq!(itm.npv, 10.0);
        assert_eq!(itm.gamma, 0.0);

        let otm = black_scholes_merton(OptionKind::Call, 90.0, 100.0, 0.05, 0.01, 0.10, 0.0);
        assert_eq!(otm.npv, 0.0);
    }

    #[test]
    fn test_deep_itm_call_delta_approaches_dividend_discount() {
        let results = black_scholes_merton(OptionKind::Call, 300.0, 100.0, 0.05, 0.01, 0.10, 1.0);
        assert_relative_eq!(results.delta, (-0.01_f64).exp(), epsilon = 1e-6);
    }

    #[test]
    fn test_vega_non_negative_across_spots() {
        for spot in [50.0, 80.0, 100.0, 120.0, 200.0] {
            let results =
                black_scholes_merton(OptionKind::Put, spot, 100.0, 0.05, 0.01, 0.10, 1.0);
            assert!(results.vega >= 0.0);
        }
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn gamma_is_non_negative(
                spot in 1.0_f64..500.0,
                strike in 1.0_f64..500.0,
                sigma in 0.01_f64..1.0,
                t in 0.01_f64..5.0,
            ) {
                let results =
                    black_scholes_merton(OptionKind::Call, spot, strike, 0.05, 0.01, sigma, t);
                prop_assert!(results.gamma >= 0.0);
            }

            #[test]
            fn call_price_within_no_arbitrage_bounds(
                spot in 1.0_f64..500.0,
                strike in 1.0_f64..500.0,
                sigma in 0.01_f64..1.0,
                t in 0.01_f64..5.0,
            ) {
                let results =
                    black_scholes_merton(OptionKind::Call, spot, strike, 0.05, 0.01, sigma, t);
                let lower = (spot * (-0.01 * t).exp() - strike * (-0.05 * t).exp()).max(0.0);
                let upper = spot * (-0.01 * t).exp();
                prop_assert!(results.npv >= lower - 1e-6);
                prop_assert!(results.npv <= upper + 1e-6);
            }
        }
    }
}
