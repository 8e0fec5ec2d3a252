//! # Treatment Transform
//!
//! Maps a before-table to an after-table. Gene expression level is
//! amplified uniformly; division rate is scaled up for Stem and
//! Differentiated cells and scaled down for Cancer cells.
//!
//! | cell type      | division rate | gene expression |
//! |----------------|---------------|-----------------|
//! | Stem           | × R           | × A             |
//! | Differentiated | × R           | × A             |
//! | Cancer         | ÷ R           | × A             |

use crate::cell::CellType;
use crate::config::TreatmentConfig;
use crate::table::{Row, Table};

/// How the treatment acts on division rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateEffect {
    /// Growth-promoting: multiply by R
    Promote,
    /// Growth-suppressing: divide by R
    Suppress,
}

impl RateEffect {
    /// Per-type rule table.
    pub fn for_type(cell_type: CellType) -> Self {
        match cell_type {
            CellType::Stem => RateEffect::Promote,
            CellType::Differentiated => RateEffect::Promote,
            CellType::Cancer => RateEffect::Suppress,
        }
    }

    pub fn apply(&self, division_rate: f64, rate_factor: f64) -> f64 {
        match self {
            RateEffect::Promote => division_rate * rate_factor,
            RateEffect::Suppress => division_rate / rate_factor,
        }
    }
}

/// Treat a single row.
pub fn treat_row(row: &Row, config: &TreatmentConfig) -> Row {
    Row {
        identifier: row.identifier.clone(),
        cell_type: row.cell_type,
        division_rate: RateEffect::for_type(row.cell_type)
            .apply(row.division_rate, config.rate_factor),
        gene_expression_level: row.gene_expression_level * config.amplifier,
    }
}

/// Build the after-table. The input is left untouched; row order,
/// identifiers and types carry over unchanged.
pub fn apply_treatment(before: &Table, config: &TreatmentConfig) -> Table {
    let after = Table::from_rows(before.iter().map(|row| treat_row(row, config)).collect());
    tracing::debug!(
        rows = after.len(),
        amplifier = config.amplifier,
        rate_factor = config.rate_factor,
        "treatment applied"
    );
    after
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, cell_type: CellType, division_rate: f64, expression: f64) -> Row {
        Row {
            identifier: id.to_string(),
            cell_type,
            division_rate,
            gene_expression_level: expression,
        }
    }

    #[test]
    fn test_stem_row() {
        let after = treat_row(&row("Cell1", CellType::Stem, 5.0, 3.0), &TreatmentConfig::default());
        assert_eq!(after.division_rate, 10.0);
        assert_eq!(after.gene_expression_level, 12.0);
    }

    #[test]
    fn test_cancer_row() {
        let after = treat_row(&row("Cell81", CellType::Cancer, 8.0, 2.0), &TreatmentConfig::default());
        assert_eq!(after.division_rate, 4.0);
        assert_eq!(after.gene_expression_level, 8.0);
    }

    #[test]
    fn test_differentiated_row() {
        let after = treat_row(
            &row("Cell41", CellType::Differentiated, 1.0, 10.0),
            &TreatmentConfig::default(),
        );
        assert_eq!(after.division_rate, 2.0);
        assert_eq!(after.gene_expression_level, 40.0);
    }

    #[test]
    fn test_cancer_division_can_be_fractional() {
        let after = treat_row(&row("Cell90", CellType::Cancer, 3.0, 1.0), &TreatmentConfig::default());
        assert_eq!(after.division_rate, 1.5);
    }

    #[test]
    fn test_rule_table() {
        assert_eq!(RateEffect::for_type(CellType::Stem), RateEffect::Promote);
        assert_eq!(RateEffect::for_type(CellType::Differentiated), RateEffect::Promote);
        assert_eq!(RateEffect::for_type(CellType::Cancer), RateEffect::Suppress);
    }

    #[test]
    fn test_custom_factors() {
        let cfg = TreatmentConfig {
            amplifier: 0.5,
            rate_factor: 4.0,
        };
        let stem = treat_row(&row("a", CellType::Stem, 2.0, 6.0), &cfg);
        assert_eq!(stem.division_rate, 8.0);
        assert_eq!(stem.gene_expression_level, 3.0);
        let cancer = treat_row(&row("b", CellType::Cancer, 2.0, 6.0), &cfg);
        assert_eq!(cancer.division_rate, 0.5);
    }

    #[test]
    fn test_apply_preserves_shape_and_input() {
        let before = Table::from_rows(vec![
            row("Cell1", CellType::Stem, 5.0, 3.0),
            row("Cell2", CellType::Differentiated, 1.0, 10.0),
            row("Cell3", CellType::Cancer, 8.0, 2.0),
        ]);
        let snapshot = before.clone();
        let after = apply_treatment(&before, &TreatmentConfig::default());

        assert_eq!(before, snapshot);
        assert_eq!(after.len(), before.len());
        for (b, a) in before.iter().zip(after.iter()) {
            assert_eq!(a.identifier, b.identifier);
            assert_eq!(a.cell_type, b.cell_type);
        }
        let rates: Vec<f64> = after.iter().map(|r| r.division_rate).collect();
        assert_eq!(rates, vec![10.0, 2.0, 4.0]);
    }

    #[test]
    fn test_apply_empty() {
        assert!(apply_treatment(&Table::default(), &TreatmentConfig::default()).is_empty());
    }
}
