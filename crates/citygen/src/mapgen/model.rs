//! Public data models for generated cities and their placement records.

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

use crate::prefab::PrefabCatalog;
use crate::types::{BigSector, Cell, GridPos, Orientation, ShapeFamily, WorldPos};

use super::emit::Placements;
use super::grid::Grid;

/// One building footprint for the renderer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub family: ShapeFamily,
    pub orientation: Orientation,
    pub grid: GridPos,
    pub world: WorldPos,
    pub yaw_degrees: f32,
}

/// World-space scaling and offset applied to grid coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldFrame {
    pub cell_size: f32,
    pub origin: WorldPos,
}

impl WorldFrame {
    pub fn world_position(&self, pos: GridPos, center: GridPos) -> WorldPos {
        WorldPos {
            x: (pos.x - center.x) as f32 * self.cell_size + self.origin.x,
            y: self.origin.y,
            z: (pos.y - center.y) as f32 * self.cell_size + self.origin.z,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationReport {
    pub map_size: usize,
    pub zones_requested: usize,
    pub zones_grown: usize,
    pub growth_exhausted: bool,
    pub pack_attempts: usize,
    pub sectors_stamped: usize,
    pub sector_budget_exhausted: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedCity {
    pub grid: Grid,
    pub frame: WorldFrame,
    pub report: GenerationReport,
}

impl GeneratedCity {
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn cell_at(&self, pos: GridPos) -> Cell {
        self.grid.get(pos).unwrap_or(Cell::Void)
    }

    /// Lazily yields one placement per renderable interior cell, row by row.
    /// Families without variants in `catalog` are skipped with a warning.
    pub fn emit<'a>(&'a self, catalog: &'a PrefabCatalog) -> Placements<'a> {
        Placements::new(&self.grid, self.frame, catalog)
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(20 + self.grid.cells().len());
        bytes.extend((self.grid.size() as u32).to_le_bytes());
        bytes.extend(self.frame.cell_size.to_le_bytes());
        bytes.extend(self.frame.origin.x.to_le_bytes());
        bytes.extend(self.frame.origin.y.to_le_bytes());
        bytes.extend(self.frame.origin.z.to_le_bytes());
        bytes.extend(self.grid.cells().iter().map(|cell| cell.code()));
        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }

    pub fn render_ascii(&self) -> String {
        let size = self.grid.size();
        let mut out = String::with_capacity(size * (size + 1));
        for (index, cell) in self.grid.cells().iter().enumerate() {
            out.push(match cell {
                Cell::Void => '.',
                Cell::Zone => '#',
                Cell::Anchor(sector, orientation) => {
                    let glyph = match sector {
                        BigSector::Domino => 'D',
                        BigSector::Corner => 'L',
                        BigSector::Square => 'S',
                    };
                    match orientation {
                        Orientation::Primary => glyph,
                        Orientation::Rotated => glyph.to_ascii_lowercase(),
                    }
                }
            });
            if (index + 1) % size == 0 {
                out.push('\n');
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_position_is_centered_scaled_and_offset() {
        let frame = WorldFrame { cell_size: 20.0, origin: WorldPos::new(100.0, 5.0, -50.0) };
        let center = GridPos::new(3, 3);
        assert_eq!(frame.world_position(center, center), WorldPos::new(100.0, 5.0, -50.0));
        assert_eq!(
            frame.world_position(GridPos::new(1, 4), center),
            WorldPos::new(60.0, 5.0, -30.0)
        );
    }

    #[test]
    fn ascii_preview_draws_one_row_per_line() {
        let mut grid = Grid::new(3);
        grid.set(GridPos::new(1, 1), Cell::Zone);
        grid.set(GridPos::new(2, 0), Cell::Anchor(BigSector::Square, Orientation::Rotated));
        let city = GeneratedCity {
            grid,
            frame: WorldFrame { cell_size: 1.0, origin: WorldPos::ORIGIN },
            report: GenerationReport::default(),
        };
        assert_eq!(city.render_ascii(), "..s\n.#.\n...\n");
    }

    #[test]
    fn canonical_bytes_hold_header_then_one_code_per_cell() {
        let mut grid = Grid::new(4);
        grid.set(GridPos::new(1, 2), Cell::Anchor(BigSector::Corner, Orientation::Primary));
        let city = GeneratedCity {
            grid,
            frame: WorldFrame { cell_size: 2.5, origin: WorldPos::ORIGIN },
            report: GenerationReport::default(),
        };

        let bytes = city.canonical_bytes();
        assert_eq!(bytes.len(), 20 + 4 * 4);
        assert_eq!(bytes.capacity(), bytes.len());
        assert_eq!(&bytes[..4], &4u32.to_le_bytes());
        assert_eq!(&bytes[4..8], &2.5f32.to_le_bytes());
        assert_eq!(bytes[20 + 2 * 4 + 1], 31);
    }
}
