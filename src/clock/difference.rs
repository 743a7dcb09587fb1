//! Circular differences between hours of the day.

use super::cyclic::{validate_hour, HALF_DAY_HOURS, HOURS_PER_DAY};
use crate::error::Result;

/// Shortest distance in hours between `start` and `end` on a 24-hour clock.
///
/// The result is always in `[0, 12]`: `(23, 1)` is 2 hours, not 22. Fails
/// with `InvalidInput` unless both arguments are within `[0, 24)`.
pub fn time_difference_in_hours(start: f64, end: f64) -> Result<f64> {
    let start = validate_hour("start", start)?;
    let end = validate_hour("end", end)?;

    let diff = (end - start).rem_euclid(HOURS_PER_DAY);
    if diff > HALF_DAY_HOURS {
        Ok(HOURS_PER_DAY - diff)
    } else {
        Ok(diff)
    }
}
