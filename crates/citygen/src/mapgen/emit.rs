//! Row-major walk of a finished lattice into placement records.

use tracing::warn;

use crate::prefab::PrefabCatalog;
use crate::types::GridPos;

use super::grid::Grid;
use super::model::{Placement, WorldFrame};
use super::shapes::yaw_degrees;

/// Single-pass iterator over the interior of a finished lattice.
///
/// The outer ring is never scanned. Void cells produce nothing; so do
/// anchors whose family has no variants in the catalog.
pub struct Placements<'a> {
    grid: &'a Grid,
    frame: WorldFrame,
    catalog: &'a PrefabCatalog,
    center: GridPos,
    next: GridPos,
}

impl<'a> Placements<'a> {
    pub(super) fn new(grid: &'a Grid, frame: WorldFrame, catalog: &'a PrefabCatalog) -> Self {
        Self { grid, frame, catalog, center: grid.center(), next: GridPos::new(1, 1) }
    }

    fn advance(&mut self) -> Option<GridPos> {
        let last = self.grid.size() as i32 - 1;
        if self.next.y >= last || self.next.x >= last {
            return None;
        }
        let current = self.next;
        self.next.x += 1;
        if self.next.x >= last {
            self.next = GridPos::new(1, self.next.y + 1);
        }
        Some(current)
    }
}

impl Iterator for Placements<'_> {
    type Item = Placement;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(pos) = self.advance() {
            let Some((family, orientation)) = self.grid.get(pos).and_then(|cell| cell.shape())
            else {
                continue;
            };
            if !self.catalog.has_variants(family) {
                warn!(?family, ?pos, "skipping placement, no prefab variants configured");
                continue;
            }
            return Some(Placement {
                family,
                orientation,
                grid: pos,
                world: self.frame.world_position(pos, self.center),
                yaw_degrees: yaw_degrees(family, orientation),
            });
        }
        None
    }
}
