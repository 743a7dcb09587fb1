//! Bounded random threat samples.
//!
//! Samples are integers drawn uniformly from a half-open range centred on a
//! department's mean, clipped to `[0, SCORE_CEILING)`.

use rand::Rng;

use crate::error::{Error, Result};

/// Exclusive upper bound for any sampled threat value.
pub const SCORE_CEILING: i64 = 90;

/// Half-open integer range `[low, high)` that threat values are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleRange {
    low: u32,
    high: u32,
}

impl SampleRange {
    /// Build the range `[max(mean - variance, 0), min(mean + variance + 1, 90))`.
    ///
    /// Fractional bounds are truncated toward zero, so `(45.5, 10.0)` gives
    /// `[35, 56)`. Fails with `InvalidInput` when `mean` or `variance` is not
    /// finite, or when the clipped range holds no integers, e.g. a mean at or
    /// above the ceiling or a negative variance.
    pub fn new(mean: f64, variance: f64) -> Result<Self> {
        if !mean.is_finite() {
            return Err(Error::non_finite("mean", mean));
        }
        if !variance.is_finite() {
            return Err(Error::non_finite("variance", variance));
        }

        // Float-to-int casts saturate, so overflowing sums still clip
        let low = (mean - variance).max(0.0).trunc() as i64;
        let high = (mean + variance + 1.0).min(SCORE_CEILING as f64).trunc() as i64;

        if low >= high {
            return Err(Error::empty_sample_range(low, high));
        }

        // 0 <= low < high <= SCORE_CEILING
        Ok(Self {
            low: low as u32,
            high: high as u32,
        })
    }

    /// Inclusive lower bound.
    pub fn low(&self) -> u32 {
        self.low
    }

    /// Exclusive upper bound.
    pub fn high(&self) -> u32 {
        self.high
    }

    /// Whether `value` can be produced by this range.
    pub fn contains(&self, value: u32) -> bool {
        (self.low..self.high).contains(&value)
    }

    /// Draw `num_samples` independent values from the range.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, num_samples: usize) -> Vec<u32> {
        (0..num_samples)
            .map(|_| rng.gen_range(self.low..self.high))
            .collect()
    }
}

/// Generate `num_samples` random threat values around `mean`.
///
/// See [`SampleRange::new`] for the range and its failure mode.
pub fn generate_random_data<R: Rng + ?Sized>(
    rng: &mut R,
    mean: f64,
    variance: f64,
    num_samples: usize,
) -> Result<Vec<u32>> {
    let range = SampleRange::new(mean, variance)?;
    Ok(range.sample(rng, num_samples))
}
