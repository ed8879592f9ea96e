//! Payoff definitions for plain vanilla options.

use std::fmt;
use std::str::FromStr;

use super::error::ContractError;

/// Direction of a vanilla option payoff.
///
/// # Examples
/// ```
/// use greeks_models::instruments::OptionKind;
///
/// assert_eq!(OptionKind::Call.sign(), 1.0);
/// assert_eq!(OptionKind::Put.sign(), -1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    /// Call option: pays max(S - K, 0) at exercise.
    #[default]
    Call,
    /// Put option: pays max(K - S, 0) at exercise.
    Put,
}

impl OptionKind {
    /// Returns the payoff sign: +1 for calls, -1 for puts.
    ///
    /// Lets the Black-Scholes-Merton formulas collapse the call/put
    /// branches into one expression.
    #[inline]
    pub fn sign(&self) -> f64 {
        match self {
            OptionKind::Call => 1.0,
            OptionKind::Put => -1.0,
        }
    }

    /// Returns whether this is a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionKind::Call)
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionKind::Call => write!(f, "call"),
            OptionKind::Put => write!(f, "put"),
        }
    }
}

impl FromStr for OptionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "call" | "c" => Ok(OptionKind::Call),
            "put" | "p" => Ok(OptionKind::Put),
            _ => Err(format!("unknown option kind: {}", s)),
        }
    }
}

/// Plain vanilla payoff: an option kind and a strike.
///
/// Immutable once constructed. The strike is validated here so no
/// engine ever sees a non-positive or non-finite strike.
///
/// # Examples
/// ```
/// use greeks_models::instruments::{OptionKind, PlainVanillaPayoff};
///
/// let payoff = PlainVanillaPayoff::new(OptionKind::Call, 100.0).unwrap();
/// assert_eq!(payoff.intrinsic(110.0), 10.0);
/// assert_eq!(payoff.intrinsic(90.0), 0.0);
///
/// assert!(PlainVanillaPayoff::new(OptionKind::Call, -1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlainVanillaPayoff {
    kind: OptionKind,
    strike: f64,
}

impl PlainVanillaPayoff {
    /// Creates a payoff from kind and strike.
    ///
    /// # Errors
    /// `ContractError::InvalidStrike` if `strike <= 0` or not finite.
    pub fn new(kind: OptionKind, strike: f64) -> Result<Self, ContractError> {
        if !(strike.is_finite() && strike > 0.0) {
            return Err(ContractError::InvalidStrike { strike });
        }
        Ok(Self { kind, strike })
    }

    /// Returns the option kind.
    #[inline]
    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Intrinsic value at the given spot.
    #[inline]
    pub fn intrinsic(&self, spot: f64) -> f64 {
        (self.kind.sign() * (spot - self.strike)).max(0.0)
    }
}
