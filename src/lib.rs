//! ThreatClock - department threat scoring and cyclic time features
//!
//! Two independent groups of pure numeric functions:
//!
//! - [`threat`]: bounded random threat samples are averaged per department,
//!   then combined into an importance-weighted company score.
//! - [`clock`]: an hour of day is mapped onto the unit circle, and the
//!   shortest circular distance between two hours is computed.
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use threatclock::{
//!     compute_aggregated_threat_score, compute_department_score, generate_random_data,
//!     time_difference_in_hours, time_to_cyclic_feature,
//! };
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let samples = generate_random_data(&mut rng, 45.5, 10.0, 100)?;
//! let engineering = compute_department_score(&samples)?;
//! let score = compute_aggregated_threat_score(&[engineering, 60.0], &[3.0, 1.0])?;
//! assert!((0.0..=90.0).contains(&score));
//!
//! let six = time_to_cyclic_feature(6.0)?;
//! assert!((six.sin - 1.0).abs() < 1e-9);
//! assert_eq!(time_difference_in_hours(23.0, 1.0)?, 2.0);
//! # Ok::<(), threatclock::Error>(())
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod threat;

pub use clock::{time_difference_in_hours, time_to_cyclic_feature, CyclicFeature};
pub use config::Config;
pub use error::{Error, Result};
pub use models::{AggregationReport, Department, DepartmentScore};
pub use threat::{
    compute_aggregated_threat_score, compute_department_score, generate_random_data, Scenario,
};
