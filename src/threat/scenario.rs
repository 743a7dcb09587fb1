//! Department scenarios.
//!
//! A scenario is a set of departments, each sampled with its own mean and
//! variance, scored, and aggregated by importance into one company score.

use rand::Rng;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::{AggregationReport, Department, DepartmentScore};

use super::aggregate::{aggregate_departments, compute_department_score};
use super::sampling::generate_random_data;

/// Default number of samples drawn per department.
pub const DEFAULT_NUM_SAMPLES: usize = 100;

/// Department names used by the built-in presets, in order.
pub const DEFAULT_DEPARTMENTS: [&str; 5] =
    ["Engineering", "Marketing", "Finance", "HR", "Science"];

/// Names accepted by [`Scenario::preset`].
pub const PRESETS: [&str; 4] = ["uniform", "weighted_finance", "varied", "finance_outliers"];

/// A named set of departments to sample and aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    /// Scenario name, copied into the report.
    pub name: String,
    /// Departments in aggregation order.
    pub departments: Vec<Department>,
    /// Samples drawn for each department.
    pub num_samples: usize,
}

impl Scenario {
    /// Create a scenario.
    pub fn new(name: impl Into<String>, departments: Vec<Department>, num_samples: usize) -> Self {
        Self {
            name: name.into(),
            departments,
            num_samples,
        }
    }

    /// Build one of the built-in scenarios by name.
    ///
    /// - `uniform`: every department at mean 45, variance 10, importance 3
    /// - `weighted_finance`: as `uniform`, Finance at importance 5, the rest at 1
    /// - `varied`: different distributions and importances per department
    /// - `finance_outliers`: Finance sampled at mean 70, variance 50
    pub fn preset(name: &str) -> Option<Self> {
        let params: [(f64, f64, f64); 5] = match name {
            "uniform" => [(45.0, 10.0, 3.0); 5],
            "weighted_finance" => [
                (45.0, 10.0, 1.0),
                (45.0, 10.0, 1.0),
                (45.0, 10.0, 5.0),
                (45.0, 10.0, 1.0),
                (45.0, 10.0, 1.0),
            ],
            "varied" => [
                (50.0, 15.0, 5.0),
                (30.0, 5.0, 1.0),
                (60.0, 20.0, 3.0),
                (40.0, 10.0, 2.0),
                (55.0, 10.0, 4.0),
            ],
            "finance_outliers" => [
                (50.0, 10.0, 3.0),
                (50.0, 10.0, 3.0),
                (70.0, 50.0, 3.0),
                (50.0, 10.0, 3.0),
                (50.0, 10.0, 3.0),
            ],
            _ => return None,
        };

        let departments = DEFAULT_DEPARTMENTS
            .iter()
            .zip(params)
            .map(|(dept_name, (mean, variance, importance))| {
                Department::new(*dept_name, mean, variance, importance)
            })
            .collect();

        Some(Self::new(name, departments, DEFAULT_NUM_SAMPLES))
    }

    /// Build the scenario described by a configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.scenario.name.clone(),
            config.scenario.departments.clone(),
            config.sampling.num_samples,
        )
    }

    /// Sample, score, and aggregate every department.
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<AggregationReport> {
        run_scenario(&self.name, &self.departments, self.num_samples, rng)
    }
}

/// Sample, score, and aggregate `departments` under the given scenario name.
///
/// Fails with `InvalidInput` if a department's sampling range is empty, a
/// parameter or importance is NaN or infinite, or `num_samples` is zero.
pub fn run_scenario<R: Rng + ?Sized>(
    name: &str,
    departments: &[Department],
    num_samples: usize,
    rng: &mut R,
) -> Result<AggregationReport> {
    if num_samples == 0 {
        return Err(Error::empty_scores());
    }

    let mut scores = Vec::with_capacity(departments.len());
    for dept in departments {
        let samples = generate_random_data(rng, dept.mean, dept.variance, num_samples)?;
        let score = compute_department_score(&samples)?;
        debug!("{}: score {:.2} from {} samples", dept.name, score, samples.len());

        scores.push(DepartmentScore {
            name: dept.name.clone(),
            importance: dept.importance,
            sample_count: samples.len(),
            score,
        });
    }

    let (aggregated_score, total_importance) = aggregate_departments(&scores)?;

    info!(
        "Scenario '{}': aggregated score {:.2} across {} departments",
        name,
        aggregated_score,
        scores.len()
    );

    Ok(AggregationReport {
        scenario: name.to_string(),
        departments: scores,
        total_importance,
        aggregated_score,
        degenerate: total_importance <= 0.0,
    })
}
