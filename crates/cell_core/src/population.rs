//! # Population Generator
//!
//! Builds the synthetic population: equal contiguous blocks of Stem,
//! Differentiated and Cancer cells, identified `Cell1..CellN` in generation
//! order, with both traits drawn uniformly from an inclusive integer range.
//!
//! The random source is always injected, so a seeded generator reproduces
//! the same population.

use crate::cell::{Cell, CellType};
use crate::config::PopulationConfig;
use crate::error::Result;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Type of every position in generation order.
///
/// Each type repeats `per_type` times contiguously, in [`CellType::ALL`] order.
pub fn type_sequence(per_type: usize) -> Vec<CellType> {
    CellType::ALL
        .iter()
        .flat_map(|&t| std::iter::repeat(t).take(per_type))
        .collect()
}

/// Generate a population with the given random source.
///
/// For each cell, `division_rate` is sampled before `gene_expression_level`.
pub fn generate_population<R: Rng + ?Sized>(
    config: &PopulationConfig,
    rng: &mut R,
) -> Result<Vec<Cell>> {
    config.validate()?;

    let range = config.trait_min..=config.trait_max;
    let cells: Vec<Cell> = type_sequence(config.per_type())
        .into_iter()
        .enumerate()
        .map(|(idx, cell_type)| {
            let division_rate = rng.gen_range(range.clone());
            let gene_expression_level = rng.gen_range(range.clone());
            Cell::with_type(
                format!("Cell{}", idx + 1),
                cell_type,
                division_rate as f64,
                gene_expression_level as f64,
            )
        })
        .collect();

    tracing::debug!(
        cells = cells.len(),
        per_type = config.per_type(),
        "population generated"
    );
    Ok(cells)
}

/// Generate a population from a ChaCha8 stream seeded with `seed`.
pub fn generate_population_seeded(config: &PopulationConfig, seed: u64) -> Result<Vec<Cell>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    generate_population(config, &mut rng)
}
