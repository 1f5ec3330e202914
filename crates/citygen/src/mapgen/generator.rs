//! High-level generation orchestration: validate, grow, pack.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};
use tracing::info;

use crate::config::CityConfig;
use crate::error::GenerationError;

use super::frontier::Frontier;
use super::growth::grow_zones;
use super::model::{GeneratedCity, GenerationReport};
use super::packing::pack_big_sectors;
use super::seed::{FURNISH_STREAM, LAYOUT_STREAM, derive_stream_seed};

/// Seeded entry point: one run seed drives the layout and, separately, the
/// prefab choices made when furnishing it.
pub struct CityGenerator {
    run_seed: u64,
}

impl CityGenerator {
    pub fn new(run_seed: u64) -> Self {
        Self { run_seed }
    }

    pub fn run_seed(&self) -> u64 {
        self.run_seed
    }

    pub fn generate(&self, config: &CityConfig) -> Result<GeneratedCity, GenerationError> {
        let mut rng = ChaCha8Rng::seed_from_u64(derive_stream_seed(self.run_seed, LAYOUT_STREAM));
        run_generation(config, &mut rng)
    }

    /// Random stream for prefab selection, independent of the layout stream.
    pub fn furnish_rng(&self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(derive_stream_seed(self.run_seed, FURNISH_STREAM))
    }
}

pub(super) fn run_generation<R: Rng + ?Sized>(
    config: &CityConfig,
    rng: &mut R,
) -> Result<GeneratedCity, GenerationError> {
    config.validate()?;
    let map_size = config.map_size()?;
    let zones_requested = config.target_zone_count as usize;

    let (mut grid, mut frontier) = Frontier::seed_territory(map_size);
    info!(map_size, center = ?grid.center(), zones_requested, "generating city");

    let growth = grow_zones(&mut grid, &mut frontier, zones_requested, rng);
    let packing = pack_big_sectors(
        &mut grid,
        &mut frontier,
        config.pack_attempt_budget(),
        config.big_sector_budget as usize,
        rng,
    );

    let report = GenerationReport {
        map_size,
        zones_requested,
        zones_grown: growth.grown,
        growth_exhausted: growth.exhausted,
        pack_attempts: packing.attempts,
        sectors_stamped: packing.stamped,
        sector_budget_exhausted: packing.budget_exhausted,
    };
    info!(
        zones_grown = report.zones_grown,
        sectors_stamped = report.sectors_stamped,
        "city layout generated"
    );
    Ok(GeneratedCity { grid, frame: config.frame(), report })
}
