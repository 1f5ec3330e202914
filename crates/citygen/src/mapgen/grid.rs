//! Square lattice of cells with bounds-checked lookup and shape stamping.

use crate::types::{Cell, GridPos};

use super::shapes::ShapeTemplate;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StampRejection {
    #[error("footprint cell {0:?} lies outside the lattice")]
    OutOfBounds(GridPos),
    #[error("footprint cell {0:?} is not an unclaimed zone")]
    Unavailable(GridPos),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        Self { size, cells: vec![Cell::Void; size * size] }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn center(&self) -> GridPos {
        let half = (self.size / 2) as i32;
        GridPos::new(half, half)
    }

    pub fn contains(&self, pos: GridPos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.size && (pos.y as usize) < self.size
    }

    /// True for cells off the outer ring. Only these may ever be occupied by growth.
    pub fn is_interior(&self, pos: GridPos) -> bool {
        pos.x >= 1
            && pos.y >= 1
            && (pos.x as usize) + 1 < self.size
            && (pos.y as usize) + 1 < self.size
    }

    pub(crate) fn index(&self, pos: GridPos) -> Option<usize> {
        self.contains(pos).then(|| (pos.y as usize) * self.size + (pos.x as usize))
    }

    pub fn get(&self, pos: GridPos) -> Option<Cell> {
        self.index(pos).map(|index| self.cells[index])
    }

    /// Writes `cell` at `pos`; out-of-bounds writes are ignored and return `false`.
    pub fn set(&mut self, pos: GridPos, cell: Cell) -> bool {
        match self.index(pos) {
            Some(index) => {
                self.cells[index] = cell;
                true
            }
            None => false,
        }
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_occupied()).count()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Every lattice position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = GridPos> + '_ {
        (0..self.size).flat_map(move |y| (0..self.size).map(move |x| GridPos::new(x as i32, y as i32)))
    }

    /// Stamps `template` anchored at `anchor` when every footprint cell is an
    /// in-bounds [`Cell::Zone`]. The anchor takes the shape code and the rest
    /// of the footprint is voided; on rejection nothing is written.
    pub fn try_stamp(
        &mut self,
        anchor: GridPos,
        template: &ShapeTemplate,
    ) -> Result<(), StampRejection> {
        for pos in template.cells(anchor) {
            match self.get(pos) {
                None => return Err(StampRejection::OutOfBounds(pos)),
                Some(Cell::Zone) => {}
                Some(_) => return Err(StampRejection::Unavailable(pos)),
            }
        }
        for pos in template.consumed_cells(anchor) {
            self.set(pos, Cell::Void);
        }
        self.set(anchor, template.anchor_cell());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapgen::shapes::template;
    use crate::types::{BigSector, Orientation};

    fn filled_zone_grid(size: usize) -> Grid {
        let mut grid = Grid::new(size);
        for pos in grid.positions().collect::<Vec<_>>() {
            grid.set(pos, Cell::Zone);
        }
        grid
    }

    #[test]
    fn out_of_bounds_access_is_ignored() {
        let mut grid = Grid::new(4);
        assert_eq!(grid.get(GridPos::new(-1, 0)), None);
        assert_eq!(grid.get(GridPos::new(0, 4)), None);
        assert!(!grid.set(GridPos::new(4, 4), Cell::Zone));
        assert_eq!(grid.occupied_count(), 0);
    }

    #[test]
    fn interior_excludes_the_outer_ring() {
        let grid = Grid::new(6);
        assert!(grid.is_interior(GridPos::new(1, 1)));
        assert!(grid.is_interior(GridPos::new(4, 4)));
        assert!(!grid.is_interior(GridPos::new(0, 3)));
        assert!(!grid.is_interior(GridPos::new(3, 5)));
    }

    #[test]
    fn stamping_voids_everything_but_the_anchor() {
        let mut grid = filled_zone_grid(5);
        let square = template(BigSector::Square, Orientation::Primary);
        grid.try_stamp(GridPos::new(1, 1), square).expect("square fits in a full grid");

        assert_eq!(grid.get(GridPos::new(1, 1)), Some(square.anchor_cell()));
        assert_eq!(grid.get(GridPos::new(2, 1)), Some(Cell::Void));
        assert_eq!(grid.get(GridPos::new(1, 2)), Some(Cell::Void));
        assert_eq!(grid.get(GridPos::new(2, 2)), Some(Cell::Void));
        assert_eq!(grid.occupied_count(), 25 - 3);
    }

    #[test]
    fn domino_crossing_the_edge_is_rejected_without_mutation() {
        let mut grid = Grid::new(6);
        let anchor = GridPos::new(5, 2);
        grid.set(anchor, Cell::Zone);
        let before = grid.clone();

        let domino = template(BigSector::Domino, Orientation::Primary);
        let rejection = grid.try_stamp(anchor, domino).expect_err("footprint leaves the lattice");

        assert_eq!(rejection, StampRejection::OutOfBounds(GridPos::new(6, 2)));
        assert_eq!(grid, before);
    }

    #[test]
    fn rotated_square_at_origin_corner_is_rejected() {
        let mut grid = filled_zone_grid(4);
        let before = grid.clone();
        let square = template(BigSector::Square, Orientation::Rotated);

        assert!(matches!(
            grid.try_stamp(GridPos::new(0, 0), square),
            Err(StampRejection::OutOfBounds(_))
        ));
        assert_eq!(grid, before);
    }

    #[test]
    fn claimed_cells_block_overlapping_stamps() {
        let mut grid = filled_zone_grid(5);
        let domino = template(BigSector::Domino, Orientation::Primary);
        grid.try_stamp(GridPos::new(1, 1), domino).expect("first domino fits");
        let before = grid.clone();

        let rejection = grid.try_stamp(GridPos::new(2, 1), domino).expect_err("cell was voided");
        assert_eq!(rejection, StampRejection::Unavailable(GridPos::new(2, 1)));
        assert_eq!(grid, before);
    }
}
