//! Frontier-driven growth of single-cell zones.

use rand_chacha::rand_core::Rng;
use tracing::{debug, warn};

use crate::types::Cell;

use super::frontier::Frontier;
use super::grid::Grid;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GrowthOutcome {
    pub grown: usize,
    pub exhausted: bool,
}

/// Occupies up to `target` frontier cells, one uniform draw per step.
/// Stops early, without failing, once the frontier runs dry.
pub fn grow_zones<R: Rng + ?Sized>(
    grid: &mut Grid,
    frontier: &mut Frontier,
    target: usize,
    rng: &mut R,
) -> GrowthOutcome {
    let mut outcome = GrowthOutcome::default();
    for _ in 0..target {
        let Some(pos) = frontier.sample(rng) else {
            outcome.exhausted = true;
            warn!(grown = outcome.grown, target, "frontier exhausted before reaching zone target");
            break;
        };
        frontier.occupy(grid, pos, Cell::Zone);
        outcome.grown += 1;
    }
    debug!(grown = outcome.grown, frontier = frontier.len(), "city territory grown");
    outcome
}
