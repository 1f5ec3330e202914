//! Footprint catalog for the multi-cell big sectors.

use crate::types::{BigSector, Cell, GridPos, Orientation, ShapeFamily};

#[derive(Debug, PartialEq, Eq)]
pub struct ShapeTemplate {
    pub sector: BigSector,
    pub orientation: Orientation,
    // First offset is the anchor.
    offsets: &'static [(i32, i32)],
}

impl ShapeTemplate {
    pub fn anchor_cell(&self) -> Cell {
        Cell::Anchor(self.sector, self.orientation)
    }

    pub fn cells(&self, anchor: GridPos) -> impl Iterator<Item = GridPos> + '_ {
        self.offsets.iter().map(move |&(dx, dy)| anchor.offset(dx, dy))
    }

    pub fn consumed_cells(&self, anchor: GridPos) -> impl Iterator<Item = GridPos> + '_ {
        self.cells(anchor).skip(1)
    }
}

const TEMPLATES: [ShapeTemplate; 6] = [
    ShapeTemplate {
        sector: BigSector::Domino,
        orientation: Orientation::Primary,
        offsets: &[(0, 0), (1, 0)],
    },
    ShapeTemplate {
        sector: BigSector::Domino,
        orientation: Orientation::Rotated,
        offsets: &[(0, 0), (0, 1)],
    },
    ShapeTemplate {
        sector: BigSector::Corner,
        orientation: Orientation::Primary,
        offsets: &[(0, 0), (1, 0), (0, 1)],
    },
    ShapeTemplate {
        sector: BigSector::Corner,
        orientation: Orientation::Rotated,
        offsets: &[(0, 0), (0, 1), (-1, 0)],
    },
    ShapeTemplate {
        sector: BigSector::Square,
        orientation: Orientation::Primary,
        offsets: &[(0, 0), (1, 0), (0, 1), (1, 1)],
    },
    ShapeTemplate {
        sector: BigSector::Square,
        orientation: Orientation::Rotated,
        offsets: &[(0, 0), (-1, 0), (0, -1), (-1, -1)],
    },
];

pub fn template(sector: BigSector, orientation: Orientation) -> &'static ShapeTemplate {
    let sector_slot = match sector {
        BigSector::Domino => 0,
        BigSector::Corner => 2,
        BigSector::Square => 4,
    };
    let orientation_slot = match orientation {
        Orientation::Primary => 0,
        Orientation::Rotated => 1,
    };
    &TEMPLATES[sector_slot + orientation_slot]
}

/// Yaw a renderer applies to the prefab placed for this shape.
pub fn yaw_degrees(family: ShapeFamily, orientation: Orientation) -> f32 {
    match (family, orientation) {
        (ShapeFamily::Domino | ShapeFamily::Corner, Orientation::Rotated) => -90.0,
        (ShapeFamily::Square, Orientation::Rotated) => 180.0,
        _ => 0.0,
    }
}
