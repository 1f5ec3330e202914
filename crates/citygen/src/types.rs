use serde::{Deserialize, Serialize};

/// A lattice coordinate. `x` indexes columns, `y` indexes rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }

    pub fn neighbors(self) -> [Self; 4] {
        [self.offset(0, 1), self.offset(0, -1), self.offset(1, 0), self.offset(-1, 0)]
    }

    pub fn manhattan(self, other: Self) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Diagonal rank used to pick the start and end landmarks.
    pub fn diagonal(self) -> i64 {
        i64::from(self.x) + i64::from(self.y)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldPos {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl WorldPos {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0, z: 0.0 };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeFamily {
    Single,
    Domino,
    Corner,
    Square,
}

/// Families that span several cells and are stamped over grown zones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BigSector {
    Domino,
    Corner,
    Square,
}

impl BigSector {
    pub const ALL: [Self; 3] = [Self::Domino, Self::Corner, Self::Square];

    pub fn cell_count(self) -> usize {
        match self {
            Self::Domino => 2,
            Self::Corner => 3,
            Self::Square => 4,
        }
    }
}

impl From<BigSector> for ShapeFamily {
    fn from(sector: BigSector) -> Self {
        match sector {
            BigSector::Domino => Self::Domino,
            BigSector::Corner => Self::Corner,
            BigSector::Square => Self::Square,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    Primary,
    Rotated,
}

/// Content of one lattice cell.
///
/// Only the anchor of a stamped shape keeps a shape code; the other cells the
/// shape covers go back to [`Cell::Void`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Void,
    Zone,
    Anchor(BigSector, Orientation),
}

impl Cell {
    pub fn is_occupied(self) -> bool {
        self != Self::Void
    }

    /// Integer code used by serialized layouts: `0`, `1`, `21/22`, `31/32`, `41/42`.
    pub fn code(self) -> u8 {
        match self {
            Self::Void => 0,
            Self::Zone => 1,
            Self::Anchor(sector, orientation) => {
                let base = match sector {
                    BigSector::Domino => 20,
                    BigSector::Corner => 30,
                    BigSector::Square => 40,
                };
                base + match orientation {
                    Orientation::Primary => 1,
                    Orientation::Rotated => 2,
                }
            }
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        let sector = match code / 10 {
            0 => {
                return match code {
                    0 => Some(Self::Void),
                    1 => Some(Self::Zone),
                    _ => None,
                };
            }
            2 => BigSector::Domino,
            3 => BigSector::Corner,
            4 => BigSector::Square,
            _ => return None,
        };
        let orientation = match code % 10 {
            1 => Orientation::Primary,
            2 => Orientation::Rotated,
            _ => return None,
        };
        Some(Self::Anchor(sector, orientation))
    }

    /// Shape family and orientation a renderer should place for this cell.
    pub fn shape(self) -> Option<(ShapeFamily, Orientation)> {
        match self {
            Self::Void => None,
            Self::Zone => Some((ShapeFamily::Single, Orientation::Primary)),
            Self::Anchor(sector, orientation) => Some((sector.into(), orientation)),
        }
    }
}
