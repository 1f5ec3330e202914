//! Procedural city layout generation split into coherent submodules.

pub mod seed;

mod emit;
mod frontier;
mod generator;
mod grid;
mod growth;
mod model;
mod packing;
mod shapes;

use rand_chacha::rand_core::Rng;

use crate::config::CityConfig;
use crate::error::GenerationError;

pub use emit::Placements;
pub use frontier::Frontier;
pub use generator::CityGenerator;
pub use grid::{Grid, StampRejection};
pub use growth::{GrowthOutcome, grow_zones};
pub use model::{GeneratedCity, GenerationReport, Placement, WorldFrame};
pub use packing::{PackingOutcome, pack_big_sectors};
pub use shapes::{ShapeTemplate, template, yaw_degrees};

/// Runs one complete generation with an injected random source.
pub fn generate<R: Rng + ?Sized>(
    config: &CityConfig,
    rng: &mut R,
) -> Result<GeneratedCity, GenerationError> {
    generator::run_generation(config, rng)
}
