//! # Pipeline Driver
//!
//! Generator → Projector → Treatment → Merger → Aggregator, in one call.

use crate::config::SimulationConfig;
use crate::error::Result;
use crate::phase::{merge, PhasedTable};
use crate::population::generate_population;
use crate::summary::{summarize, Summary};
use crate::table::{project, Table};
use crate::treatment::apply_treatment;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

/// Every intermediate product of a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineOutput {
    pub before: Table,
    pub after: Table,
    pub merged: PhasedTable,
    pub summary: Summary,
}

/// Run the full pipeline with the given random source.
pub fn run<R: Rng + ?Sized>(config: &SimulationConfig, rng: &mut R) -> Result<PipelineOutput> {
    config.validate()?;

    let cells = generate_population(&config.population, rng)?;
    let before = project(&cells);
    tracing::info!(cells = before.len(), "population projected");

    treat_table(config, before)
}

/// Run the full pipeline from a ChaCha8 stream seeded with `seed`.
pub fn run_seeded(config: &SimulationConfig, seed: u64) -> Result<PipelineOutput> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    tracing::info!(seed, size = config.population.size, "starting simulation");
    run(config, &mut rng)
}

/// Treatment → Merger → Aggregator for an existing before-table.
pub fn treat_table(config: &SimulationConfig, before: Table) -> Result<PipelineOutput> {
    config.treatment.validate()?;

    let after = apply_treatment(&before, &config.treatment);
    let merged = merge(&before, &after)?;
    let summary = summarize(&merged);
    tracing::info!(rows = merged.len(), "treatment summarized");

    Ok(PipelineOutput {
        before,
        after,
        merged,
        summary,
    })
}
