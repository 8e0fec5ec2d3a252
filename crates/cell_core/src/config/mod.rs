//! # Simulation Configuration
//!
//! Every tunable constant of the pipeline in one place.
//!
//! ```rust
//! use cell_core::config::SimulationConfig;
//!
//! let config = SimulationConfig::default();
//! assert_eq!(config.population.size, 120);
//! assert_eq!(config.treatment.amplifier, 4.0);
//! ```

mod population_config;
mod treatment_config;

pub use population_config::PopulationConfig;
pub use treatment_config::TreatmentConfig;

use crate::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SimulationConfig {
    #[serde(default)]
    pub population: PopulationConfig,
    #[serde(default)]
    pub treatment: TreatmentConfig,
}

impl SimulationConfig {
    /// 120 cells, traits in [1, 10], A = 4, R = 2
    pub fn standard() -> Self {
        Self::default()
    }

    /// Ten cells per type, for quick runs
    pub fn small() -> Self {
        let mut cfg = Self::default();
        cfg.population.size = 30;
        cfg
    }

    pub fn validate(&self) -> Result<()> {
        self.population.validate()?;
        self.treatment.validate()
    }

    /// Parse and validate a YAML document. Missing fields keep their defaults.
    pub fn from_yaml_str(src: &str) -> Result<Self> {
        let cfg: Self = serde_yaml::from_str(src)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate a JSON document. Missing fields keep their defaults.
    pub fn from_json_str(src: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(src)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
