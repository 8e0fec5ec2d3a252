//! Plain-text rendering of summary tables.

use cell_core::{Summary, SummaryRow, Trait};
use std::fmt::{self, Write};

fn fmt_stat(value: f64) -> String {
    if value.is_nan() {
        "-".to_string()
    } else {
        format!("{:.3}", value)
    }
}

fn write_header(out: &mut String) -> fmt::Result {
    writeln!(
        out,
        "{:<8} {:>6} {:>10} {:>10} {:>10} {:>10}",
        "phase", "count", "mean", "std", "min", "max"
    )
}

fn write_row(out: &mut String, label: &str, row: &SummaryRow) -> fmt::Result {
    writeln!(
        out,
        "{:<8} {:>6} {:>10} {:>10} {:>10} {:>10}",
        label,
        row.count,
        fmt_stat(row.mean),
        fmt_stat(row.std_dev),
        fmt_stat(row.min),
        fmt_stat(row.max),
    )
}

/// Write one table per trait, one line per phase.
pub fn write_summary(out: &mut String, summary: &Summary) -> fmt::Result {
    for t in Trait::ALL {
        writeln!(out, "{}", t)?;
        write_header(out)?;
        for (phase, row) in summary.for_trait(t) {
            write_row(out, phase.label(), row)?;
        }
        writeln!(out)?;
    }
    Ok(())
}
