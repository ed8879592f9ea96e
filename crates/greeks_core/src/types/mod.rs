//! Foundational types: dates, day counts, and their errors.

pub mod error;
pub mod time;

pub use error::DateError;
pub use time::{Date, DayCount};
