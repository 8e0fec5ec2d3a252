//! # cell_core - Cell Population Treatment Simulation
//!
//! Generates a synthetic cell population, applies a deterministic treatment
//! to its two numeric traits and summarizes the before/after comparison.
//!
//! ## Features
//! - Reproducible runs (same seed = same population)
//! - Exhaustive per-type treatment rules
//! - Phased table for plotting, per-phase summary for reporting
//!
//! ```rust
//! use cell_core::{pipeline, Phase, SimulationConfig, Trait};
//!
//! let out = pipeline::run_seeded(&SimulationConfig::default(), 42).unwrap();
//! assert_eq!(out.merged.len(), 240);
//! let before = out.summary.get(Trait::DivisionRate, Phase::Before).unwrap();
//! assert_eq!(before.count, 120);
//! ```

pub mod cell;
pub mod config;
pub mod error;
pub mod phase;
pub mod pipeline;
pub mod population;
pub mod summary;
pub mod table;
pub mod treatment;

pub use cell::{Cell, CellType};
pub use config::{PopulationConfig, SimulationConfig, TreatmentConfig};
pub use error::{CellError, Result};
pub use phase::{merge, Phase, PhasedRow, PhasedTable};
pub use pipeline::PipelineOutput;
pub use population::{generate_population, generate_population_seeded};
pub use summary::{describe, summarize, Summary, SummaryRow, Trait};
pub use table::{project, Row, Table};
pub use treatment::{apply_treatment, RateEffect};
