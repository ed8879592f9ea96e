//! Vanilla option definitions.

use greeks_core::types::Date;

use super::error::ContractError;
use super::exercise::EuropeanExercise;
use super::payoff::{OptionKind, PlainVanillaPayoff};

/// Vanilla option: a plain payoff plus a European exercise schedule.
///
/// Immutable for the lifetime of a request. Combines the validated
/// payoff with its exercise date to form the full contract description
/// an engine needs.
///
/// # Examples
/// ```
/// use greeks_core::types::Date;
/// use greeks_models::instruments::{OptionKind, VanillaOption};
///
/// let expiry = Date::from_ymd(2021, 12, 15).unwrap();
/// let option = VanillaOption::european(OptionKind::Call, 100.0, expiry).unwrap();
///
/// assert_eq!(option.strike(), 100.0);
/// assert_eq!(option.expiry_date(), expiry);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VanillaOption {
    payoff: PlainVanillaPayoff,
    exercise: EuropeanExercise,
}

impl VanillaOption {
    /// Creates a vanilla option from a payoff and an exercise schedule.
    #[inline]
    pub fn new(payoff: PlainVanillaPayoff, exercise: EuropeanExercise) -> Self {
        Self { payoff, exercise }
    }

    /// Convenience constructor for a European vanilla option.
    ///
    /// # Errors
    /// `ContractError::InvalidStrike` if the strike is non-positive or
    /// not finite.
    pub fn european(kind: OptionKind, strike: f64, expiry: Date) -> Result<Self, ContractError> {
        let payoff = PlainVanillaPayoff::new(kind, strike)?;
        Ok(Self::new(payoff, EuropeanExercise::new(expiry)))
    }

    /// Returns the payoff description.
    #[inline]
    pub fn payoff(&self) -> PlainVanillaPayoff {
        self.payoff
    }

    /// Returns the exercise schedule.
    #[inline]
    pub fn exercise(&self) -> EuropeanExercise {
        self.exercise
    }

    /// Returns the option kind.
    #[inline]
    pub fn kind(&self) -> OptionKind {
        self.payoff.kind()
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.payoff.strike()
    }

    /// Returns the expiry date.
    #[inline]
    pub fn expiry_date(&self) -> Date {
        self.exercise.expiry()
    }
}
