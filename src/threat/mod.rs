//! Threat score sampling and aggregation.

pub mod aggregate;
pub mod sampling;
pub mod scenario;

pub use aggregate::*;
pub use sampling::*;
pub use scenario::*;
