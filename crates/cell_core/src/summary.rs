//! # Summary Aggregator
//!
//! Groups a phased table by phase and reports count, mean, sample standard
//! deviation (n - 1 divisor), min and max for each numeric trait.
//!
//! Cell type is not a grouping key here.
//!
//! ## Degenerate groups
//! - A phase with no rows produces no entry.
//! - A single-row group reports its value as mean/min/max and `NaN` as
//!   standard deviation.

use crate::phase::{Phase, PhasedRow, PhasedTable};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Numeric trait of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Trait {
    DivisionRate,
    GeneExpressionLevel,
}

impl Trait {
    pub const ALL: [Trait; 2] = [Trait::DivisionRate, Trait::GeneExpressionLevel];

    pub fn name(&self) -> &'static str {
        match self {
            Trait::DivisionRate => "division_rate",
            Trait::GeneExpressionLevel => "gene_expression_level",
        }
    }

    pub fn value(&self, row: &PhasedRow) -> f64 {
        match self {
            Trait::DivisionRate => row.division_rate,
            Trait::GeneExpressionLevel => row.gene_expression_level,
        }
    }
}

impl fmt::Display for Trait {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Descriptive statistics for one group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryRow {
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

/// Statistics kernel. `None` for an empty slice.
pub fn describe(values: &[f64]) -> Option<SummaryRow> {
    let count = values.len();
    if count == 0 {
        return None;
    }

    let n = count as f64;
    let mean = values.iter().sum::<f64>() / n;
    let std_dev = if count < 2 {
        f64::NAN
    } else {
        let sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
        (sq / (n - 1.0)).sqrt()
    };
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Some(SummaryRow {
        count,
        mean,
        std_dev,
        min,
        max,
    })
}

/// Per-trait summaries keyed by phase.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    pub division_rate: BTreeMap<Phase, SummaryRow>,
    pub gene_expression_level: BTreeMap<Phase, SummaryRow>,
}

impl Summary {
    pub fn for_trait(&self, t: Trait) -> &BTreeMap<Phase, SummaryRow> {
        match t {
            Trait::DivisionRate => &self.division_rate,
            Trait::GeneExpressionLevel => &self.gene_expression_level,
        }
    }

    pub fn get(&self, t: Trait, phase: Phase) -> Option<&SummaryRow> {
        self.for_trait(t).get(&phase)
    }
}

fn summarize_trait(table: &PhasedTable, t: Trait) -> BTreeMap<Phase, SummaryRow> {
    Phase::ALL
        .into_iter()
        .filter_map(|phase| {
            let values: Vec<f64> = table.phase_rows(phase).map(|r| t.value(r)).collect();
            describe(&values).map(|row| (phase, row))
        })
        .collect()
}

/// Aggregate a phased table.
pub fn summarize(table: &PhasedTable) -> Summary {
    let summary = Summary {
        division_rate: summarize_trait(table, Trait::DivisionRate),
        gene_expression_level: summarize_trait(table, Trait::GeneExpressionLevel),
    };
    tracing::debug!(
        groups = summary.division_rate.len(),
        rows = table.len(),
        "summary computed"
    );
    summary
}
