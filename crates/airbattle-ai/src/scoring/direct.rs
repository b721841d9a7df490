//! Kill-phase direct targeting.
//!
//! With only a handful of hypotheses left, list their unattacked cells and
//! shoot the most valuable one: heads first, then body, then extremities.

use airbattle_core::constants::{PRIORITY_BODY, PRIORITY_EXTREMITY, PRIORITY_HEAD};
use airbattle_core::enums::CellKind;
use airbattle_core::types::Position;
use airbattle_core::BoardQuery;

use crate::candidates::CandidatePlane;

pub fn priority(kind: CellKind) -> u32 {
    match kind {
        CellKind::Head => PRIORITY_HEAD,
        CellKind::Body => PRIORITY_BODY,
        CellKind::Wing | CellKind::Tail => PRIORITY_EXTREMITY,
    }
}

/// Highest-priority unattacked cell across the candidates, ties to the
/// first enumerated. `None` when every candidate cell is already attacked.
pub fn pick<B: BoardQuery + ?Sized>(candidates: &[CandidatePlane], board: &B) -> Option<Position> {
    let mut best: Option<(Position, u32)> = None;
    for cell in candidates.iter().flat_map(|p| p.cells.iter()) {
        if board.is_attacked(cell.pos) {
            continue;
        }
        let p = priority(cell.kind);
        if best.map_or(true, |(_, b)| p > b) {
            best = Some((cell.pos, p));
        }
    }
    best.map(|(pos, _)| pos)
}
