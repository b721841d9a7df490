//! Candidate placements: every way a single airplane could sit on the board.

use airbattle_core::constants::PLANE_CELL_COUNT;
use airbattle_core::enums::Orientation;
use airbattle_core::shape::{PlaneCell, ShapeTemplate};
use airbattle_core::types::Position;

/// A hypothesis of one airplane's placement. Not a fact.
///
/// `cells[0]` is always the head and every cell is on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidatePlane {
    pub orientation: Orientation,
    pub head: Position,
    pub cells: [PlaneCell; PLANE_CELL_COUNT],
}

impl CandidatePlane {
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.iter().any(|c| c.pos == pos)
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().map(|c| c.pos)
    }
}

/// Enumerate every placement that fits entirely inside the board.
///
/// Order is head row, head column, then orientation. Placements are not
/// checked against each other; several airplanes may legitimately touch.
pub fn generate(template: &ShapeTemplate, board_size: i32) -> Vec<CandidatePlane> {
    let mut planes = Vec::new();
    for head in Position::all(board_size) {
        for orientation in Orientation::ALL {
            let cells = template.place(head, orientation);
            if cells.iter().all(|c| c.pos.in_bounds(board_size)) {
                planes.push(CandidatePlane {
                    orientation,
                    head,
                    cells,
                });
            }
        }
    }
    planes
}
