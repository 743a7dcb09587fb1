//! Sine/cosine encoding of the hour of day.
//!
//! Mapping the hour onto the unit circle keeps 23:00 and 01:00 as close
//! together as 11:00 and 13:00, which a linear hour value does not.

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use crate::error::{Error, Result};

/// Length of the cycle in hours.
pub const HOURS_PER_DAY: f64 = 24.0;

/// Longest possible circular distance between two hours.
pub const HALF_DAY_HOURS: f64 = 12.0;

/// A time of day as a point on the unit circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CyclicFeature {
    /// `sin(2π · hour / 24)`
    pub sin: f64,
    /// `cos(2π · hour / 24)`
    pub cos: f64,
}

impl CyclicFeature {
    /// Phase angle in radians, in `[0, 2π)`.
    pub fn angle(&self) -> f64 {
        let angle = self.sin.atan2(self.cos).rem_euclid(TAU);
        // rem_euclid can round up to exactly TAU for tiny negative angles
        if angle >= TAU {
            0.0
        } else {
            angle
        }
    }

    /// Recover the hour of day this feature encodes.
    pub fn to_hours(&self) -> f64 {
        let hours = self.angle() * HOURS_PER_DAY / TAU;
        if hours >= HOURS_PER_DAY {
            0.0
        } else {
            hours
        }
    }

    /// Euclidean (chord) distance between two features.
    ///
    /// Ranges from 0 for the same hour to 2 for hours twelve apart.
    pub fn distance(&self, other: &CyclicFeature) -> f64 {
        (self.sin - other.sin).hypot(self.cos - other.cos)
    }

    /// The feature as a `(sin, cos)` tuple.
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.sin, self.cos)
    }
}

impl From<CyclicFeature> for (f64, f64) {
    fn from(feature: CyclicFeature) -> Self {
        feature.as_tuple()
    }
}

/// Check that `value` is an hour within `[0, 24)`.
pub(crate) fn validate_hour(name: &str, value: f64) -> Result<f64> {
    if (0.0..HOURS_PER_DAY).contains(&value) {
        Ok(value)
    } else {
        Err(Error::time_out_of_range(name, value))
    }
}

/// Convert an hour of day to its cyclic feature.
///
/// Fails with `InvalidInput` unless `0 <= time < 24`.
pub fn time_to_cyclic_feature(time: f64) -> Result<CyclicFeature> {
    let time = validate_hour("time", time)?;

    let angle = TAU * time / HOURS_PER_DAY;
    let (sin, cos) = angle.sin_cos();
    Ok(CyclicFeature { sin, cos })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const TOLERANCE: f64 = 1e-9;

    fn assert_feature(time: f64, sin: f64, cos: f64) {
        let feature = time_to_cyclic_feature(time).unwrap();
        assert!(
            (feature.sin - sin).abs() < TOLERANCE && (feature.cos - cos).abs() < TOLERANCE,
            "time {} gave ({}, {}), expected ({}, {})",
            time,
            feature.sin,
            feature.cos,
            sin,
            cos
        );
    }

    #[test]
    fn test_quarter_points() {
        assert_feature(0.0, 0.0, 1.0);
        assert_feature(6.0, 1.0, 0.0);
        assert_feature(12.0, 0.0, -1.0);
        assert_feature(18.0, -1.0, 0.0);
    }

    #[test]
    fn test_late_evening() {
        let angle = TAU * 23.0 / 24.0;
        assert_feature(23.0, angle.sin(), angle.cos());
    }

    #[test]
    fn test_invalid_time() {
        for time in [24.0, -1.0, 25.5, -0.001, f64::NAN, f64::INFINITY] {
            let err = time_to_cyclic_feature(time).unwrap_err();
            assert!(err.is_invalid_input(), "{} should be rejected", time);
        }
    }

    #[test]
    fn test_just_below_midnight() {
        let feature = time_to_cyclic_feature(23.999_999).unwrap();
        assert!(feature.sin < 0.0);
        assert!((feature.cos - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_distance() {
        let midnight = time_to_cyclic_feature(0.0).unwrap();
        let noon = time_to_cyclic_feature(12.0).unwrap();
        let late = time_to_cyclic_feature(23.0).unwrap();
        let early = time_to_cyclic_feature(1.0).unwrap();

        assert!((midnight.distance(&noon) - 2.0).abs() < TOLERANCE);
        assert!(midnight.distance(&midnight) < TOLERANCE);
        // Wraps across midnight
        assert!(late.distance(&early) < midnight.distance(&noon));
    }

    #[test]
    fn test_tuple_conversion() {
        let feature = time_to_cyclic_feature(6.0).unwrap();
        let (sin, cos): (f64, f64) = feature.into();
        assert_eq!((sin, cos), feature.as_tuple());
    }

    proptest! {
        #[test]
        fn lies_on_unit_circle(time in 0.0..24.0f64) {
            let feature = time_to_cyclic_feature(time).unwrap();
            let norm = feature.sin * feature.sin + feature.cos * feature.cos;
            prop_assert!((norm - 1.0).abs() < TOLERANCE);
        }

        #[test]
        fn inverts_back_to_hours(time in 0.0..23.99f64) {
            let feature = time_to_cyclic_feature(time).unwrap();
            prop_assert!((feature.to_hours() - time).abs() < TOLERANCE, "{} -> {}", time, feature.to_hours());
        }
    }
}
