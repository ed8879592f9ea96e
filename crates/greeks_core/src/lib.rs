//! # greeks_core: Foundation Layer for the Greekview Workspace
//!
//! Provides the primitives the analytics and server layers build on:
//! - Time types: `Date`, `DayCount` (`types::time`)
//! - Market data: yield curves, volatility surfaces, quotes (`market_data`)
//! - Error types: `DateError`, `MarketDataError`
//!
//! ## Zero Dependency Principle
//!
//! This layer has no dependencies on other greeks_* crates, with minimal
//! external dependencies:
//! - chrono: date arithmetic
//! - serde: serialisation support
//! - thiserror: structured error types
//!
//! ## Usage Examples
//!
//! ```rust
//! use greeks_core::types::{Date, DayCount};
//!
//! let valuation = Date::from_ymd(2021, 1, 1).unwrap();
//! let expiry = Date::from_ymd(2021, 12, 15).unwrap();
//! let t = DayCount::Act365Fixed.year_fraction(valuation, expiry);
//! assert!((t - 348.0 / 365.0).abs() < 1e-12);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod types;
