//! Analytic pricing for European vanilla options.
//!
//! Closed-form Black-Scholes-Merton only; no numerical grids or Monte
//! Carlo. The module mirrors the handle-based wiring of the classic
//! quant library stack: a process observes a settable spot quote plus
//! flat curves, and an engine reads Greeks off the process.

pub mod black_scholes;
pub mod distributions;
pub mod engine;
pub mod error;
pub mod process;

pub use black_scholes::{black_scholes_merton, GreekResults};
pub use distributions::{norm_cdf, norm_pdf};
pub use engine::AnalyticEuropeanEngine;
pub use error::EngineError;
pub use process::BlackScholesMertonProcess;
