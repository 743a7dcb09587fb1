//! Department scoring and weighted aggregation.

use tracing::debug;

use crate::error::{Error, Result};
use crate::models::DepartmentScore;

/// Compute a department's threat score as the mean of its samples.
///
/// Accepts raw integer samples as well as real-valued scores.
pub fn compute_department_score<T>(scores: &[T]) -> Result<f64>
where
    T: Copy + Into<f64>,
{
    if scores.is_empty() {
        return Err(Error::empty_scores());
    }

    let sum: f64 = scores.iter().map(|&s| s.into()).sum();
    Ok(sum / scores.len() as f64)
}

/// Compute the company's threat score as the importance-weighted mean of
/// department scores.
///
/// Returns `0.0` when the importances sum to zero or less. Fails with
/// `InvalidInput` on mismatched lengths or a NaN or infinite importance.
pub fn compute_aggregated_threat_score(
    department_scores: &[f64],
    department_importance: &[f64],
) -> Result<f64> {
    Ok(weighted_mean(department_scores, department_importance)?.0)
}

/// Aggregate scored departments using their own importances.
///
/// Returns the aggregated score and the total importance. A total of zero
/// or less means the score fell back to 0.
pub fn aggregate_departments(departments: &[DepartmentScore]) -> Result<(f64, f64)> {
    let scores: Vec<f64> = departments.iter().map(|d| d.score).collect();
    let importance: Vec<f64> = departments.iter().map(|d| d.importance).collect();

    weighted_mean(&scores, &importance)
}

/// Weighted mean plus the total weight it was normalised by.
fn weighted_mean(scores: &[f64], weights: &[f64]) -> Result<(f64, f64)> {
    if scores.len() != weights.len() {
        return Err(Error::length_mismatch(scores.len(), weights.len()));
    }

    if let Some(&weight) = weights.iter().find(|w| !w.is_finite()) {
        return Err(Error::non_finite("importance", weight));
    }

    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        debug!(
            "Total importance {} is not positive, aggregated score defaults to 0",
            total
        );
        return Ok((0.0, total));
    }

    let weighted_sum: f64 = scores.iter().zip(weights).map(|(s, w)| s * w).sum();
    Ok((weighted_sum / total, total))
}
