//! Population Generation Configuration

use crate::cell::CellType;
use crate::error::{CellError, Result};
use serde::{Deserialize, Serialize};

/// Population generator parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationConfig {
    /// Total number of cells; split evenly across the three types (default: 120)
    pub size: usize,
    /// Lower bound of the trait sampling range, inclusive (default: 1)
    pub trait_min: u32,
    /// Upper bound of the trait sampling range, inclusive (default: 10)
    pub trait_max: u32,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            size: 120,
            trait_min: 1,
            trait_max: 10,
        }
    }
}

impl PopulationConfig {
    /// Cells generated per type block.
    pub fn per_type(&self) -> usize {
        self.size / CellType::ALL.len()
    }

    pub fn validate(&self) -> Result<()> {
        let types = CellType::ALL.len();
        if self.size == 0 {
            return Err(CellError::InvalidConfig("population size must be positive".into()));
        }
        if self.size % types != 0 {
            return Err(CellError::InvalidConfig(format!(
                "population size {} is not divisible by {}",
                self.size, types
            )));
        }
        if self.trait_min > self.trait_max {
            return Err(CellError::InvalidConfig(format!(
                "trait range [{}, {}] is empty",
                self.trait_min, self.trait_max
            )));
        }
        Ok(())
    }
}
