//! Search-phase heat map.
//!
//! Every surviving candidate votes for its head with a weight that favours
//! edges, corners, the centre and the neighbourhood of active hits, and
//! casts a small vote for each of its other cells. The result is an
//! expected-value heuristic, not a probability.

use airbattle_core::constants::*;
use airbattle_core::enums::CellKind;
use airbattle_core::types::Position;
use airbattle_core::BoardQuery;

use super::{first_unattacked, ScoreGrid};
use crate::candidates::CandidatePlane;
use crate::evidence::Evidence;

/// Vote weight for a candidate's head cell.
pub fn head_weight(head: Position, board_size: i32, evidence: &Evidence) -> f64 {
    let mut weight = HEAT_HEAD_BASE;

    if head.is_corner(board_size) {
        weight += HEAT_CORNER_BONUS;
    } else if head.is_edge(board_size) {
        weight += HEAT_EDGE_BONUS;
    }

    let center = board_size as f64 / 2.0;
    let center_dist = (head.row as f64 - center).abs() + (head.col as f64 - center).abs();
    if center_dist <= HEAT_CENTER_RADIUS {
        weight += HEAT_CENTER_BONUS;
    }

    let near_hits = evidence
        .active_hits
        .iter()
        .filter(|h| head.manhattan_to(h) <= HEAT_NEAR_HIT_RADIUS)
        .count();
    weight += HEAT_NEAR_HIT_BONUS * near_hits as f64;

    let near_misses = evidence
        .misses
        .iter()
        .filter(|m| head.manhattan_to(m) <= HEAT_NEAR_MISS_RADIUS)
        .count();
    weight -= HEAT_NEAR_MISS_PENALTY * near_misses as f64;

    weight
}

/// Accumulate the heat map for a candidate set.
pub fn score(candidates: &[CandidatePlane], evidence: &Evidence) -> ScoreGrid<f64> {
    let size = evidence.board_size;
    let mut grid = ScoreGrid::new(size);
    for plane in candidates {
        grid.add(plane.head, head_weight(plane.head, size, evidence));
        for cell in plane.cells.iter().filter(|c| c.kind != CellKind::Head) {
            let weight = match cell.kind {
                CellKind::Body => HEAT_BODY_WEIGHT,
                _ => HEAT_EXTREMITY_WEIGHT,
            };
            grid.add(cell.pos, weight);
        }
    }
    grid
}

/// Hottest unattacked cell; the first unattacked cell if nothing voted.
pub fn pick<B: BoardQuery + ?Sized>(
    candidates: &[CandidatePlane],
    evidence: &Evidence,
    board: &B,
) -> Option<Position> {
    score(candidates, evidence)
        .argmax(board)
        .map(|(pos, _)| pos)
        .or_else(|| first_unattacked(board))
}
