//! Treatment Configuration

use crate::error::{CellError, Result};
use serde::{Deserialize, Serialize};

/// Treatment factors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreatmentConfig {
    /// Amplifier A applied to gene expression level (default: 4.0)
    pub amplifier: f64,
    /// Rate-change factor R for division rate (default: 2.0)
    pub rate_factor: f64,
}

impl Default for TreatmentConfig {
    fn default() -> Self {
        Self {
            amplifier: 4.0,
            rate_factor: 2.0,
        }
    }
}

impl TreatmentConfig {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("amplifier", self.amplifier), ("rate_factor", self.rate_factor)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(CellError::InvalidConfig(format!(
                    "{} must be finite and positive, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
