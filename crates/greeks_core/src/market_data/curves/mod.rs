//! Yield curve implementations.

pub mod flat;
pub mod traits;

pub use flat::FlatForwardCurve;
pub use traits::YieldCurve;
