//! Market data abstractions: quotes, yield curves, and volatility surfaces.

pub mod curves;
pub mod error;
pub mod quotes;
pub mod surfaces;

pub use curves::{FlatForwardCurve, YieldCurve};
pub use error::MarketDataError;
pub use quotes::SimpleQuote;
pub use surfaces::{ConstantVol, VolatilitySurface};
