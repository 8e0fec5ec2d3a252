//! # Phase Merger
//!
//! Concatenates the before and after tables into one phased table. Phase
//! tags are assigned by position: the first half is Before, the second
//! half After. Identifiers are never used to pair rows.

use crate::cell::CellType;
use crate::error::{CellError, Result};
use crate::table::{Row, Table};
use serde::Serialize;
use std::fmt;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Phase {
    Before,
    After,
}

impl Phase {
    pub const ALL: [Phase; 2] = [Phase::Before, Phase::After];

    pub fn label(&self) -> &'static str {
        match self {
            Phase::Before => "Before",
            Phase::After => "After",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A table row with its phase tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhasedRow {
    pub identifier: String,
    pub cell_type: CellType,
    pub division_rate: f64,
    pub gene_expression_level: f64,
    pub phase: Phase,
}

impl PhasedRow {
    fn tag(row: &Row, phase: Phase) -> Self {
        Self {
            identifier: row.identifier.clone(),
            cell_type: row.cell_type,
            division_rate: row.division_rate,
            gene_expression_level: row.gene_expression_level,
            phase,
        }
    }

    /// The row without its phase tag.
    pub fn to_row(&self) -> Row {
        Row {
            identifier: self.identifier.clone(),
            cell_type: self.cell_type,
            division_rate: self.division_rate,
            gene_expression_level: self.gene_expression_level,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PhasedTable {
    rows: Vec<PhasedRow>,
}

impl PhasedTable {
    pub fn rows(&self) -> &[PhasedRow] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PhasedRow> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows tagged with `phase`, in table order.
    pub fn phase_rows(&self, phase: Phase) -> impl Iterator<Item = &PhasedRow> {
        self.rows.iter().filter(move |r| r.phase == phase)
    }

    /// Write as CSV; the visualizer reads this layout.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        for row in &self.rows {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

/// Concatenate `before` then `after`, tagging each half with its phase.
///
/// Fails with [`CellError::PhaseLengthMismatch`] when the row counts differ.
pub fn merge(before: &Table, after: &Table) -> Result<PhasedTable> {
    if before.len() != after.len() {
        tracing::warn!(before = before.len(), after = after.len(), "phase tables differ in length");
        return Err(CellError::PhaseLengthMismatch {
            before: before.len(),
            after: after.len(),
        });
    }

    let rows = before
        .iter()
        .map(|row| PhasedRow::tag(row, Phase::Before))
        .chain(after.iter().map(|row| PhasedRow::tag(row, Phase::After)))
        .collect();
    Ok(PhasedTable { rows })
}
