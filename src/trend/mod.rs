//! Trend estimation: the national-level growth signal, per-geography
//! windowed trends, and the shrinkage blend between them

pub mod global;
pub mod local;
pub mod shrinkage;

pub use global::{GlobalTrendParameters, GROWTH_CEILING, GROWTH_FLOOR};
pub use local::{local_growth, LOCAL_WINDOW};
pub use shrinkage::combine;
