//! # Tabular Projection
//!
//! Row-oriented view of a population. Once projected, the table is the
//! system of record; cells are no longer consulted.

use crate::cell::{Cell, CellType};
use crate::error::{CellError, Result};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

/// `(identifier, cell_type, division_rate, gene_expression_level)`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub identifier: String,
    pub cell_type: CellType,
    pub division_rate: f64,
    pub gene_expression_level: f64,
}

impl From<&Cell> for Row {
    fn from(cell: &Cell) -> Self {
        Self {
            identifier: cell.identifier().to_string(),
            cell_type: cell.cell_type(),
            division_rate: cell.division_rate(),
            gene_expression_level: cell.gene_expression_level(),
        }
    }
}

/// CSV record before the type label is decoded.
#[derive(Debug, Deserialize)]
struct RawRow {
    identifier: String,
    cell_type: String,
    division_rate: f64,
    gene_expression_level: f64,
}

impl TryFrom<RawRow> for Row {
    type Error = CellError;

    fn try_from(raw: RawRow) -> Result<Self> {
        let cell_type = raw
            .cell_type
            .parse::<CellType>()
            .map_err(|_| CellError::UnknownCellType { label: raw.cell_type.clone() })?;
        Ok(Self {
            identifier: raw.identifier,
            cell_type,
            division_rate: raw.division_rate,
            gene_expression_level: raw.gene_expression_level,
        })
    }
}

/// Ordered rows; order is generation order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    /// Write as CSV with a header line.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        for row in &self.rows {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Read a CSV table. Unknown type labels fail with [`CellError::UnknownCellType`].
    pub fn read_csv<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let mut rows = Vec::new();
        for record in rdr.deserialize::<RawRow>() {
            rows.push(Row::try_from(record?)?);
        }
        tracing::debug!(rows = rows.len(), "table loaded from csv");
        Ok(Self { rows })
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Map each cell to its row, preserving order.
pub fn project(cells: &[Cell]) -> Table {
    Table {
        rows: cells.iter().map(Row::from).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PopulationConfig;
    use crate::population::generate_population_seeded;

    fn sample_cells() -> Vec<Cell> {
        vec![
            Cell::new("Cell1", "Stem", 5.0, 3.0).unwrap(),
            Cell::new("Cell2", "Differentiated", 1.0, 10.0).unwrap(),
            Cell::new("Cell3", "Cancer", 8.0, 2.0).unwrap(),
        ]
    }

    #[test]
    fn test_project_preserves_order_and_values() {
        let cells = sample_cells();
        let table = project(&cells);
        assert_eq!(table.len(), 3);
        for (cell, row) in cells.iter().zip(table.iter()) {
            assert_eq!(row.identifier, cell.identifier());
            assert_eq!(row.cell_type, cell.cell_type());
            assert_eq!(row.division_rate, cell.division_rate());
            assert_eq!(row.gene_expression_level, cell.gene_expression_level());
        }
    }

    #[test]
    fn test_project_is_idempotent() {
        let cells = generate_population_seeded(&PopulationConfig::default(), 11).unwrap();
        assert_eq!(project(&cells), project(&cells));
    }

    #[test]
    fn test_project_empty() {
        assert!(project(&[]).is_empty());
    }

    #[test]
    fn test_csv_header_and_labels() {
        let table = project(&sample_cells());
        let mut buf = Vec::new();
        table.write_csv(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("identifier,cell_type,division_rate,gene_expression_level")
        );
        assert_eq!(lines.next(), Some("Cell1,Stem,5.0,3.0"));
        assert_eq!(lines.clone().count(), 2);
    }

    #[test]
    fn test_read_csv_written_table() {
        let table = project(&sample_cells());
        let mut buf = Vec::new();
        table.write_csv(&mut buf).unwrap();
        assert_eq!(Table::read_csv(buf.as_slice()).unwrap(), table);
    }

    #[test]
    fn test_read_csv_accepts_integers() {
        let src = "identifier,cell_type,division_rate,gene_expression_level\nCell1, Cancer ,8,2\n";
        let table = Table::read_csv(src.as_bytes()).unwrap();
        assert_eq!(table.rows()[0].cell_type, CellType::Cancer);
        assert_eq!(table.rows()[0].division_rate, 8.0);
    }

    #[test]
    fn test_read_csv_unknown_type() {
        let src = "identifier,cell_type,division_rate,gene_expression_level\nCell1,Neuron,1,1\n";
        let err = Table::read_csv(src.as_bytes()).unwrap_err();
        assert!(matches!(err, CellError::UnknownCellType { ref label } if label == "Neuron"));
    }

    #[test]
    fn test_read_csv_malformed_number() {
        let src = "identifier,cell_type,division_rate,gene_expression_level\nCell1,Stem,fast,1\n";
        assert!(matches!(Table::read_csv(src.as_bytes()), Err(CellError::Csv(_))));
    }
}
