//! # greeks_models: Instruments and Analytic Pricing
//!
//! Vanilla option instruments and the closed-form Black-Scholes-Merton
//! machinery behind the gamma endpoint:
//!
//! - Instrument definitions: payoffs, European exercise, vanilla options
//!   (`instruments`)
//! - Normal distribution helpers and the analytic European engine
//!   (`analytical`)
//! - The gamma-curve operation tying quote, process, and engine together
//!   (`gamma`)
//!
//! ## Design Principles
//!
//! - Immutable contracts and market sets; the only mutable state in a
//!   revaluation loop is the spot quote
//! - Validation at construction, structured errors via `thiserror`
//! - Closed-form analytics only; no lattice or Monte Carlo pricers

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod gamma;
pub mod instruments;
