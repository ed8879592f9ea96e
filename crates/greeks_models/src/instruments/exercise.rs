//! Exercise schedule definitions.

use greeks_core::types::Date;

/// European exercise: a single exercise opportunity at expiry.
///
/// The analytic engine only supports this style; path-dependent and
/// early-exercise schedules are out of scope for the closed-form
/// machinery.
///
/// # Examples
/// ```
/// use greeks_core::types::Date;
/// use greeks_models::instruments::EuropeanExercise;
///
/// let expiry = Date::from_ymd(2021, 12, 15).unwrap();
/// let exercise = EuropeanExercise::new(expiry);
/// assert_eq!(exercise.expiry(), expiry);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EuropeanExercise {
    expiry: Date,
}

impl EuropeanExercise {
    /// Creates a European exercise at the given expiry date.
    ///
    /// Whether the expiry lies after the valuation date is a property of
    /// the (contract, market) pair, so it is checked by the engine at
    /// pricing time rather than here.
    #[inline]
    pub fn new(expiry: Date) -> Self {
        Self { expiry }
    }

    /// Returns the expiry date.
    #[inline]
    pub fn expiry(&self) -> Date {
        self.expiry
    }
}
