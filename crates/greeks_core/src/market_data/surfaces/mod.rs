//! Volatility surface implementations.

pub mod flat;
pub mod traits;

pub use flat::ConstantVol;
pub use traits::VolatilitySurface;
