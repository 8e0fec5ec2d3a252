//! # Cell Entity
//!
//! Immutable value for one simulated cell: an identifier, a closed
//! [`CellType`] and two numeric traits fixed at creation.

use crate::error::{CellError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cell category. Closed set; every branch over it must be exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CellType {
    Stem,
    Differentiated,
    Cancer,
}

impl CellType {
    /// Generation order of the type blocks.
    pub const ALL: [CellType; 3] = [CellType::Stem, CellType::Differentiated, CellType::Cancer];

    /// Canonical label, as accepted by [`CellType::from_str`].
    pub fn label(&self) -> &'static str {
        match self {
            CellType::Stem => "Stem",
            CellType::Differentiated => "Differentiated",
            CellType::Cancer => "Cancer",
        }
    }
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CellType {
    type Err = CellError;

    fn from_str(label: &str) -> Result<Self> {
        CellType::ALL
            .into_iter()
            .find(|t| t.label() == label)
            .ok_or_else(|| CellError::InvalidCellType { label: label.to_string() })
    }
}

/// One simulated cell. No mutators; read through the accessors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    identifier: String,
    cell_type: CellType,
    division_rate: f64,
    gene_expression_level: f64,
}

impl Cell {
    /// Build a cell from a type label.
    ///
    /// Fails with [`CellError::InvalidCellType`] when `type_label` is not one of
    /// `"Stem"`, `"Differentiated"` or `"Cancer"`. Trait values are taken as given.
    pub fn new(
        identifier: impl Into<String>,
        type_label: &str,
        division_rate: f64,
        gene_expression_level: f64,
    ) -> Result<Self> {
        let cell_type = type_label.parse::<CellType>()?;
        Ok(Self::with_type(identifier, cell_type, division_rate, gene_expression_level))
    }

    /// Build a cell from an already validated type.
    pub fn with_type(
        identifier: impl Into<String>,
        cell_type: CellType,
        division_rate: f64,
        gene_expression_level: f64,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            cell_type,
            division_rate,
            gene_expression_level,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn cell_type(&self) -> CellType {
        self.cell_type
    }

    pub fn division_rate(&self) -> f64 {
        self.division_rate
    }

    pub fn gene_expression_level(&self) -> f64 {
        self.gene_expression_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_canonical_labels() {
        for (label, expected) in [
            ("Stem", CellType::Stem),
            ("Differentiated", CellType::Differentiated),
            ("Cancer", CellType::Cancer),
        ] {
            let cell = Cell::new("Cell1", label, 3.0, 7.0).unwrap();
            assert_eq!(cell.cell_type(), expected);
            assert_eq!(cell.identifier(), "Cell1");
            assert_eq!(cell.division_rate(), 3.0);
            assert_eq!(cell.gene_expression_level(), 7.0);
        }
    }

    #[test]
    fn test_new_rejects_unknown_label() {
        let err = Cell::new("Cell1", "Neuron", 1.0, 1.0).unwrap_err();
        assert!(matches!(err, CellError::InvalidCellType { ref label } if label == "Neuron"));
    }

    #[test]
    fn test_labels_are_case_sensitive() {
        assert!("stem".parse::<CellType>().is_err());
        assert!("CANCER".parse::<CellType>().is_err());
        assert!("".parse::<CellType>().is_err());
    }

    #[test]
    fn test_label_round_trip() {
        for t in CellType::ALL {
            assert_eq!(t.label().parse::<CellType>().unwrap(), t);
            assert_eq!(t.to_string(), t.label());
        }
    }
}
