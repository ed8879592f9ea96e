//! Error types for date construction and parsing.

use thiserror::Error;

/// Errors raised when constructing or parsing a [`crate::types::Date`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DateError {
    /// The year/month/day combination does not form a calendar date.
    #[error("invalid calendar date: {year}-{month:02}-{day:02}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// The input string is not an ISO 8601 date.
    #[error("failed to parse date: {0}")]
    ParseError(String),
}
