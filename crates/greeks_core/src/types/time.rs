//! Time types and day count conventions.
//!
//! This module provides:
//! - `Date`: type-safe date wrapper around `chrono::NaiveDate`
//! - `DayCount`: year fraction conventions used by term structures
//!
//! # Examples
//!
//! ```
//! use greeks_core::types::{Date, DayCount};
//!
//! let start = Date::from_ymd(2021, 1, 1).unwrap();
//! let end = Date::from_ymd(2021, 7, 1).unwrap();
//!
//! let yf = DayCount::Act365Fixed.year_fraction(start, end);
//! assert!((yf - 181.0 / 365.0).abs() < 1e-12);
//! ```

use chrono::{Datelike, Local, NaiveDate};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Type-safe date wrapper around `chrono::NaiveDate`.
///
/// Serialises as an ISO 8601 string and supports the arithmetic the
/// pricing layer needs: ordering, day differences, and year fractions
/// via [`DayCount`].
///
/// # Examples
///
/// ```
/// use greeks_core::types::Date;
///
/// let date = Date::from_ymd(2021, 12, 15).unwrap();
/// assert_eq!(date.year(), 2021);
///
/// let parsed: Date = "2021-12-15".parse().unwrap();
/// assert_eq!(date, parsed);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a date from year, month, and day components.
    ///
    /// Returns `DateError::InvalidDate` if the components do not form a
    /// valid calendar date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Returns today's date based on local system time.
    pub fn today() -> Self {
        Date(Local::now().date_naive())
    }

    /// Parses a date from ISO 8601 format (YYYY-MM-DD).
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(e.to_string()))
    }

    /// Returns the underlying `NaiveDate` for access to chrono's full API.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    ///
    /// Positive if `self` is after `other`, negative otherwise.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Day count convention (year fraction convention).
///
/// # Variants
/// - `Act365Fixed`: actual days / 365 (standard in derivatives markets)
/// - `Act360`: actual days / 360 (money market instruments)
///
/// # Usage
///
/// ```
/// use greeks_core::types::{Date, DayCount};
///
/// let start = Date::from_ymd(2021, 1, 1).unwrap();
/// let end = Date::from_ymd(2022, 1, 1).unwrap();
/// assert_eq!(DayCount::Act365Fixed.year_fraction(start, end), 1.0);
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DayCount {
    /// Actual/365 Fixed: actual_days / 365.0
    #[default]
    Act365Fixed,

    /// Actual/360: actual_days / 360.0
    Act360,
}

impl DayCount {
    /// Returns the industry-standard convention name.
    pub fn name(&self) -> &'static str {
        match self {
            DayCount::Act365Fixed => "ACT/365F",
            DayCount::Act360 => "ACT/360",
        }
    }

    /// Calculates the year fraction between two dates.
    ///
    /// Returns a negative value when `start > end`; the sign carries the
    /// direction rather than panicking, so callers can detect expired
    /// instruments from the result.
    pub fn year_fraction(&self, start: Date, end: Date) -> f64 {
        let days = (end - start) as f64;
        match self {
            DayCount::Act365Fixed => days / 365.0,
            DayCount::Act360 => days / 360.0,
        }
    }
}

impl FromStr for DayCount {
    type Err = String;

    /// Parses a day count convention from string (case-insensitive).
    ///
    /// Accepts common aliases: "ACT/365", "Actual/365", "A365" and the
    /// "360" equivalents.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace(['/', ' '], "").as_str() {
            "ACT365" | "ACT365F" | "ACTUAL365" | "A365" => Ok(DayCount::Act365Fixed),
            "ACT360" | "ACTUAL360" | "A360" => Ok(DayCount::Act360),
            _ => Err(format!("unknown day count convention: {}", s)),
        }
    }
}

impl fmt::Display for DayCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

mod serde_impl {
    use super::DayCount;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for DayCount {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for DayCount {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            DayCount::from_str(&s).map_err(de::Error::custom)
        }
    }
}
