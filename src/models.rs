//! Data models for threat scoring.
//!
//! This module contains the data structures passed between sampling,
//! scoring, and aggregation, and the report produced by a scenario run.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A department's sampling parameters and its weight in the company score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    /// Display name (e.g. "Finance").
    pub name: String,
    /// Centre of the sampled threat values.
    pub mean: f64,
    /// Half-width of the sampled threat values.
    pub variance: f64,
    /// Weight of this department in the aggregated score.
    pub importance: f64,
}

impl Department {
    /// Creates a department.
    pub fn new(name: impl Into<String>, mean: f64, variance: f64, importance: f64) -> Self {
        Self {
            name: name.into(),
            mean,
            variance,
            importance,
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (mean {}, variance {}, importance {})",
            self.name, self.mean, self.variance, self.importance
        )
    }
}

/// The mean threat value of one department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentScore {
    /// Department name.
    pub name: String,
    /// Weight carried over from the department.
    pub importance: f64,
    /// Number of samples the score was computed from.
    pub sample_count: usize,
    /// Arithmetic mean of the samples.
    pub score: f64,
}

/// Result of aggregating a set of departments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationReport {
    /// Name of the scenario that produced this report.
    pub scenario: String,
    /// Per-department scores, in input order.
    pub departments: Vec<DepartmentScore>,
    /// Sum of all department importances.
    pub total_importance: f64,
    /// Importance-weighted mean of the department scores.
    pub aggregated_score: f64,
    /// True when total importance was not positive and the score fell back to 0.
    pub degenerate: bool,
}

impl AggregationReport {
    /// Smallest and largest department score, if any departments were scored.
    pub fn score_bounds(&self) -> Option<(f64, f64)> {
        let mut scores = self.departments.iter().map(|d| d.score);
        let first = scores.next()?;
        Some(scores.fold((first, first), |(lo, hi), s| (lo.min(s), hi.max(s))))
    }

    /// Render the report as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for AggregationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Scenario: {}", self.scenario)?;
        for dept in &self.departments {
            writeln!(
                f,
                "- {}: {:.2} (importance {}, {} samples)",
                dept.name, dept.score, dept.importance, dept.sample_count
            )?;
        }
        write!(f, "Aggregated Score: {:.2}", self.aggregated_score)?;
        if self.degenerate {
            write!(f, " (no positive importance)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_report() -> AggregationReport {
        AggregationReport {
            scenario: "test".to_string(),
            departments: vec![
                DepartmentScore {
                    name: "Engineering".to_string(),
                    importance: 1.0,
                    sample_count: 10,
                    score: 40.0,
                },
                DepartmentScore {
                    name: "Finance".to_string(),
                    importance: 3.0,
                    sample_count: 10,
                    score: 61.0,
                },
            ],
            total_importance: 4.0,
            aggregated_score: 55.75,
            degenerate: false,
        }
    }

    #[test]
    fn test_score_bounds() {
        let report = make_report();
        assert_eq!(report.score_bounds(), Some((40.0, 61.0)));

        let empty = AggregationReport {
            departments: Vec::new(),
            ..report
        };
        assert_eq!(empty.score_bounds(), None);
    }

    #[test]
    fn test_report_json() {
        let json = make_report().to_json().unwrap();
        assert!(json.contains("\"scenario\": \"test\""));
        assert!(json.contains("\"aggregated_score\": 55.75"));

        let parsed: AggregationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, make_report());
    }

    #[test]
    fn test_report_display() {
        let text = make_report().to_string();
        assert!(text.starts_with("Scenario: test"));
        assert!(text.contains("- Finance: 61.00 (importance 3, 10 samples)"));
        assert!(text.ends_with("Aggregated Score: 55.75"));
    }

    #[test]
    fn test_department_display() {
        let dept = Department::new("HR", 40.5, 10.0, 2.0);
        assert_eq!(dept.to_string(), "HR (mean 40.5, variance 10, importance 2)");
    }
}
