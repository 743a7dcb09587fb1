//! Configuration file handling.
//!
//! This module handles loading and validating scenario configuration from
//! `.threatclock.toml` files.

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

use crate::error::Error;
use crate::models::Department;
use crate::threat::{SampleRange, Scenario, DEFAULT_NUM_SAMPLES};

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".threatclock.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Sampling settings.
    #[serde(default)]
    pub sampling: SamplingConfig,

    /// Departments to aggregate.
    #[serde(default)]
    pub scenario: ScenarioConfig,
}

/// General settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Seed for the sample generator. Unseeded runs draw from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            seed: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Sampling settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Samples drawn per department.
    #[serde(default = "default_num_samples")]
    pub num_samples: usize,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            num_samples: default_num_samples(),
        }
    }
}

fn default_num_samples() -> usize {
    DEFAULT_NUM_SAMPLES
}

/// Scenario settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Name reported alongside the aggregated score.
    #[serde(default = "default_scenario_name")]
    pub name: String,

    /// Departments in aggregation order.
    #[serde(default = "default_departments")]
    pub departments: Vec<Department>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            name: default_scenario_name(),
            departments: default_departments(),
        }
    }
}

fn default_scenario_name() -> String {
    "uniform".to_string()
}

fn default_departments() -> Vec<Department> {
    Scenario::preset("uniform")
        .map(|s| s.departments)
        .unwrap_or_default()
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        Self::load_from_dir(Path::new("."))
    }

    /// Try to load `.threatclock.toml` from a directory.
    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>> {
        let config_path = dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            Ok(Some(Self::load(&config_path)?))
        } else {
            Ok(None)
        }
    }

    /// Configuration running one of the built-in scenarios.
    pub fn for_preset(name: &str) -> Option<Self> {
        let scenario = Scenario::preset(name)?;
        Some(Self {
            general: GeneralConfig::default(),
            sampling: SamplingConfig {
                num_samples: scenario.num_samples,
            },
            scenario: ScenarioConfig {
                name: scenario.name,
                departments: scenario.departments,
            },
        })
    }

    /// Check that the configuration describes a runnable scenario.
    pub fn validate(&self) -> Result<()> {
        self.log_level()?;

        if self.sampling.num_samples == 0 {
            return Err(Error::empty_scores()).context("sampling.num_samples must be at least 1");
        }

        if self.scenario.departments.is_empty() {
            anyhow::bail!("Scenario '{}' has no departments", self.scenario.name);
        }

        for dept in &self.scenario.departments {
            SampleRange::new(dept.mean, dept.variance)
                .with_context(|| format!("Department {} cannot be sampled", dept.name))?;

            if !dept.importance.is_finite() || dept.importance < 0.0 {
                anyhow::bail!(
                    "Department {} has invalid importance {}",
                    dept.name,
                    dept.importance
                );
            }
        }

        let total: f64 = self.scenario.departments.iter().map(|d| d.importance).sum();
        if total <= 0.0 {
            warn!(
                "Scenario '{}' has no positive importance; aggregated score will be 0",
                self.scenario.name
            );
        }

        Ok(())
    }

    /// Parse the configured log level.
    pub fn log_level(&self) -> Result<tracing::Level> {
        self.general
            .log_level
            .parse()
            .map_err(|_| anyhow::anyhow!("Unknown log level: {}", self.general.log_level))
    }

    /// Sample generator for this configuration.
    pub fn make_rng(&self) -> ChaCha8Rng {
        match self.general.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}
