//! Start, end and featured-block selection over an emitted placement sequence.

use serde::Serialize;

use crate::mapgen::Placement;
use crate::types::ShapeFamily;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Landmarks {
    pub start: Placement,
    pub end: Placement,
    /// Square block nearest to the start, other than the start and end themselves.
    pub featured_square: Option<Placement>,
}

/// Start is the placement with the smallest `x + y`, end the one with the
/// largest. Earlier placements win ties. `None` for an empty sequence.
pub fn find_landmarks(placements: &[Placement]) -> Option<Landmarks> {
    let mut start = placements.first()?;
    let mut end = start;
    for placement in &placements[1..] {
        if placement.grid.diagonal() < start.grid.diagonal() {
            start = placement;
        }
        if placement.grid.diagonal() > end.grid.diagonal() {
            end = placement;
        }
    }

    let mut featured: Option<&Placement> = None;
    for placement in placements {
        if placement.family != ShapeFamily::Square
            || placement.grid == start.grid
            || placement.grid == end.grid
        {
            continue;
        }
        let distance = placement.grid.manhattan(start.grid);
        if featured.is_none_or(|best| distance < best.grid.manhattan(start.grid)) {
            featured = Some(placement);
        }
    }

    Some(Landmarks { start: start.clone(), end: end.clone(), featured_square: featured.cloned() })
}
