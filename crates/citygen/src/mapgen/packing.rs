//! Stamping of multi-cell big sectors over grown single-cell zones.

use rand_chacha::rand_core::Rng;
use tracing::{debug, trace};

use crate::types::{BigSector, Cell, Orientation};

use super::frontier::{CellPool, Frontier};
use super::grid::Grid;
use super::seed::{coin_flip, random_index};
use super::shapes::template;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PackingOutcome {
    pub attempts: usize,
    pub stamped: usize,
    pub budget_exhausted: bool,
}

/// Spends up to `attempt_budget` attempts stamping at most `sector_budget`
/// big sectors. Each attempt samples an unclaimed zone, a sector and an
/// orientation; a footprint that does not fit wastes the attempt. Cells a
/// stamp vacates are handed back to `frontier`.
pub fn pack_big_sectors<R: Rng + ?Sized>(
    grid: &mut Grid,
    frontier: &mut Frontier,
    attempt_budget: usize,
    sector_budget: usize,
    rng: &mut R,
) -> PackingOutcome {
    let mut candidates = CellPool::new(grid.size());
    for pos in grid.positions().collect::<Vec<_>>() {
        if grid.get(pos) == Some(Cell::Zone) {
            candidates.insert(pos);
        }
    }

    let mut outcome = PackingOutcome::default();
    let mut remaining_sectors = sector_budget;
    while remaining_sectors > 0 && outcome.attempts < attempt_budget {
        let Some(anchor) = candidates.sample(rng) else {
            break;
        };
        let sector = BigSector::ALL[random_index(rng, BigSector::ALL.len())];
        let orientation = if coin_flip(rng) { Orientation::Rotated } else { Orientation::Primary };
        outcome.attempts += 1;

        let shape = template(sector, orientation);
        match grid.try_stamp(anchor, shape) {
            Ok(()) => {
                for pos in shape.cells(anchor) {
                    candidates.remove(pos);
                    frontier.reevaluate_around(grid, pos);
                }
                remaining_sectors -= 1;
                outcome.stamped += 1;
            }
            Err(rejection) => trace!(?anchor, ?sector, ?orientation, %rejection, "big sector skipped"),
        }
    }
    outcome.budget_exhausted = remaining_sectors == 0;
    debug!(
        attempts = outcome.attempts,
        stamped = outcome.stamped,
        budget_exhausted = outcome.budget_exhausted,
        "big sectors calculated"
    );
    outcome
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::SeedableRng;

    use super::*;
    use crate::mapgen::frontier::Frontier;
    use crate::mapgen::growth::grow_zones;
    use crate::types::GridPos;

    fn grown_territory(size: usize, zones: usize, seed: u64) -> (Grid, Frontier) {
        let (mut grid, mut frontier) = Frontier::seed_territory(size);
        grow_zones(&mut grid, &mut frontier, zones, &mut ChaCha8Rng::seed_from_u64(seed));
        (grid, frontier)
    }

    #[test]
    fn zero_sector_budget_leaves_every_zone_single() {
        let (mut grid, mut frontier) = grown_territory(12, 30, 1);
        let before = grid.clone();
        let outcome =
            pack_big_sectors(&mut grid, &mut frontier, 30, 0, &mut ChaCha8Rng::seed_from_u64(1));
        assert_eq!(outcome, PackingOutcome { attempts: 0, stamped: 0, budget_exhausted: true });
        assert_eq!(grid, before);
    }

    #[test]
    fn sector_budget_caps_stamped_shapes() {
        let (mut grid, mut frontier) = grown_territory(20, 100, 9);
        let outcome =
            pack_big_sectors(&mut grid, &mut frontier, 1_000, 3, &mut ChaCha8Rng::seed_from_u64(9));
        assert_eq!(outcome.stamped, 3);
        assert!(outcome.budget_exhausted);
        let anchors = grid.cells().iter().filter(|cell| matches!(cell, Cell::Anchor(..))).count();
        assert_eq!(anchors, 3);
    }

    #[test]
    fn attempt_budget_bounds_work_even_when_nothing_fits() {
        // A lone center cell can never host a multi-cell footprint.
        let (mut grid, mut frontier) = Frontier::seed_territory(6);
        let outcome =
            pack_big_sectors(&mut grid, &mut frontier, 25, 10, &mut ChaCha8Rng::seed_from_u64(4));
        assert_eq!(outcome, PackingOutcome { attempts: 25, stamped: 0, budget_exhausted: false });
        assert_eq!(grid.occupied_count(), 1);
    }

    #[test]
    fn stamped_footprints_never_overlap_and_cover_former_zones() {
        for seed in 0..20_u64 {
            let (before, mut frontier) = grown_territory(16, 60, seed);
            let mut grid = before.clone();
            pack_big_sectors(&mut grid, &mut frontier, 60, 500, &mut ChaCha8Rng::seed_from_u64(seed));

            let mut claimed = BTreeSet::new();
            for anchor in grid.positions() {
                let Some(Cell::Anchor(sector, orientation)) = grid.get(anchor) else {
                    continue;
                };
                for pos in template(sector, orientation).cells(anchor) {
                    assert_eq!(before.get(pos), Some(Cell::Zone), "seed={seed} {pos:?}");
                    assert!(claimed.insert(pos), "cell {pos:?} claimed twice for seed={seed}");
                    if pos != anchor {
                        assert_eq!(grid.get(pos), Some(Cell::Void));
                    }
                }
            }
        }
    }

    #[test]
    fn full_interior_packs_some_shapes() {
        let (mut grid, mut frontier) = Frontier::seed_territory(8);
        let interior: Vec<GridPos> = grid.positions().filter(|&pos| grid.is_interior(pos)).collect();
        for pos in interior {
            frontier.occupy(&mut grid, pos, Cell::Zone);
        }
        assert!(frontier.is_empty());

        let outcome =
            pack_big_sectors(&mut grid, &mut frontier, 200, 500, &mut ChaCha8Rng::seed_from_u64(2));
        assert!(outcome.stamped > 0);
        assert_eq!(grid.get(GridPos::new(0, 0)), Some(Cell::Void));
        assert!(!frontier.is_empty());
        assert!(frontier.is_consistent_with(&grid));
    }

    #[test]
    fn vacated_footprint_cells_rejoin_the_frontier() {
        for seed in 0..20_u64 {
            let (mut grid, mut frontier) = grown_territory(16, 60, seed);
            let outcome =
                pack_big_sectors(&mut grid, &mut frontier, 60, 500, &mut ChaCha8Rng::seed_from_u64(seed));
            assert!(outcome.stamped > 0, "seed={seed}");
            assert!(frontier.is_consistent_with(&grid), "seed={seed}");
        }
    }

    #[test]
    fn growth_after_packing_refills_vacated_cells() {
        let (mut grid, mut frontier) = grown_territory(16, 60, 3);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        pack_big_sectors(&mut grid, &mut frontier, 60, 500, &mut rng);
        let occupied = grid.occupied_count();

        let outcome = grow_zones(&mut grid, &mut frontier, 10, &mut rng);

        assert_eq!(outcome.grown, 10);
        assert_eq!(grid.occupied_count(), occupied + 10);
        assert!(frontier.is_consistent_with(&grid));
    }
}
