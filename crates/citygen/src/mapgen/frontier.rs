//! Vacant-cell frontier and the indexed coordinate pool it is built on.
//!
//! The pool keeps members in a dense vector plus a per-cell slot table so
//! insertion, removal and uniform sampling are all constant time, and the
//! sampling order depends only on the sequence of operations.

use rand_chacha::rand_core::Rng;

use crate::types::{Cell, GridPos};

use super::grid::Grid;
use super::seed::random_index;

const ABSENT: u32 = u32::MAX;

#[derive(Clone, Debug)]
pub(crate) struct CellPool {
    width: usize,
    members: Vec<GridPos>,
    slots: Vec<u32>,
}

impl CellPool {
    pub(crate) fn new(width: usize) -> Self {
        Self { width, members: Vec::new(), slots: vec![ABSENT; width * width] }
    }

    fn slot_index(&self, pos: GridPos) -> Option<usize> {
        let in_bounds = pos.x >= 0
            && pos.y >= 0
            && (pos.x as usize) < self.width
            && (pos.y as usize) < self.width;
        in_bounds.then(|| (pos.y as usize) * self.width + (pos.x as usize))
    }

    pub(crate) fn len(&self) -> usize {
        self.members.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub(crate) fn contains(&self, pos: GridPos) -> bool {
        self.slot_index(pos).is_some_and(|index| self.slots[index] != ABSENT)
    }

    /// Returns `false` when `pos` was already a member or lies outside the pool.
    pub(crate) fn insert(&mut self, pos: GridPos) -> bool {
        let Some(index) = self.slot_index(pos) else {
            return false;
        };
        if self.slots[index] != ABSENT {
            return false;
        }
        self.slots[index] = self.members.len() as u32;
        self.members.push(pos);
        true
    }

    pub(crate) fn remove(&mut self, pos: GridPos) -> bool {
        let Some(index) = self.slot_index(pos) else {
            return false;
        };
        let slot = self.slots[index];
        if slot == ABSENT {
            return false;
        }
        self.slots[index] = ABSENT;
        self.members.swap_remove(slot as usize);
        if let Some(&moved) = self.members.get(slot as usize)
            && let Some(moved_index) = self.slot_index(moved)
        {
            self.slots[moved_index] = slot;
        }
        true
    }

    pub(crate) fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<GridPos> {
        if self.members.is_empty() {
            return None;
        }
        Some(self.members[random_index(rng, self.members.len())])
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = GridPos> + '_ {
        self.members.iter().copied()
    }
}

/// Vacant interior cells orthogonally adjacent to occupied territory.
#[derive(Clone, Debug)]
pub struct Frontier {
    pool: CellPool,
}

impl Frontier {
    /// Allocates a `size`-wide lattice, occupies its center and registers the
    /// center's vacant neighbors.
    pub fn seed_territory(size: usize) -> (Grid, Self) {
        let mut grid = Grid::new(size);
        let mut frontier = Self { pool: CellPool::new(size) };
        let center = grid.center();
        frontier.occupy(&mut grid, center, Cell::Zone);
        (grid, frontier)
    }

    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    pub fn contains(&self, pos: GridPos) -> bool {
        self.pool.contains(pos)
    }

    pub fn iter(&self) -> impl Iterator<Item = GridPos> + '_ {
        self.pool.iter()
    }

    pub(crate) fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<GridPos> {
        self.pool.sample(rng)
    }

    /// Writes `cell` at `pos` and re-evaluates frontier membership of `pos`
    /// and its neighbors. Out-of-bounds positions are ignored.
    pub fn occupy(&mut self, grid: &mut Grid, pos: GridPos, cell: Cell) -> bool {
        if !grid.set(pos, cell) {
            return false;
        }
        self.reevaluate_around(grid, pos);
        true
    }

    /// Re-evaluates `pos` and its four orthogonal neighbors after `pos`
    /// changed outside of [`Frontier::occupy`].
    pub fn reevaluate_around(&mut self, grid: &Grid, pos: GridPos) {
        self.reevaluate(grid, pos);
        self.refresh_neighbors(grid, pos);
    }

    /// Re-evaluates frontier membership of the four orthogonal neighbors of
    /// `pos`.
    pub fn refresh_neighbors(&mut self, grid: &Grid, pos: GridPos) {
        for neighbor in pos.neighbors() {
            self.reevaluate(grid, neighbor);
        }
    }

    /// A cell belongs to the frontier iff it is vacant, interior and touches
    /// an occupied cell.
    fn reevaluate(&mut self, grid: &Grid, pos: GridPos) {
        match grid.get(pos) {
            None => {}
            Some(Cell::Void) if grid.is_interior(pos) && touches_occupied(grid, pos) => {
                self.pool.insert(pos);
            }
            Some(_) => {
                self.pool.remove(pos);
            }
        }
    }

    /// Checks both directions of the frontier invariant against `grid`.
    pub fn is_consistent_with(&self, grid: &Grid) -> bool {
        let members_vacant = self.iter().all(|pos| grid.get(pos) == Some(Cell::Void));
        let vacant_registered = grid.positions().all(|pos| {
            let expected = grid.is_interior(pos)
                && grid.get(pos) == Some(Cell::Void)
                && touches_occupied(grid, pos);
            expected == self.contains(pos)
        });
        members_vacant && vacant_registered
    }
}

fn touches_occupied(grid: &Grid, pos: GridPos) -> bool {
    pos.neighbors().iter().any(|&next| grid.get(next).is_some_and(Cell::is_occupied))
}
