//! Cyclic time-of-day features and circular hour differences.

pub mod cyclic;
pub mod difference;

pub use cyclic::*;
pub use difference::*;
