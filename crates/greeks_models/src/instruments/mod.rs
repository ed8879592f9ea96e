//! Instrument definitions: payoffs, exercise, and vanilla options.

pub mod error;
pub mod exercise;
pub mod payoff;
pub mod vanilla;

pub use error::ContractError;
pub use exercise::EuropeanExercise;
pub use payoff::{OptionKind, PlainVanillaPayoff};
pub use vanilla::VanillaOption;
