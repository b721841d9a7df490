//! Lock-phase information-gain scorer.
//!
//! Striking cell `c` splits the candidates into those covering `c` and
//! those that don't; whichever way the shot lands, at least
//! `min(covers, misses)` hypotheses are eliminated. Cells that are likely
//! heads get a heavy bonus because a head hit ends the airplane.

use airbattle_core::constants::INFO_HEAD_BONUS;
use airbattle_core::types::Position;
use airbattle_core::BoardQuery;

use super::{heatmap, ScoreGrid};
use crate::candidates::CandidatePlane;
use crate::evidence::Evidence;

/// Information-gain score for every unattacked cell.
pub fn score<B: BoardQuery + ?Sized>(candidates: &[CandidatePlane], board: &B) -> ScoreGrid<u64> {
    let size = board.board_size();
    let mut covers: ScoreGrid<u64> = ScoreGrid::new(size);
    let mut heads: ScoreGrid<u64> = ScoreGrid::new(size);
    for plane in candidates {
        heads.add(plane.head, 1);
        for pos in plane.positions() {
            covers.add(pos, 1);
        }
    }

    let total = candidates.len() as u64;
    let mut grid = ScoreGrid::new(size);
    for pos in Position::all(size) {
        if board.is_attacked(pos) {
            continue;
        }
        let covered = covers.get(pos).unwrap_or(0);
        let gain = covered.min(total - covered);
        let head_bonus = INFO_HEAD_BONUS * heads.get(pos).unwrap_or(0);
        grid.set(pos, gain + head_bonus);
    }
    grid
}

/// Best information-gain cell, or the heat-map choice when every cell
/// scores zero.
pub fn pick<B: BoardQuery + ?Sized>(
    candidates: &[CandidatePlane],
    evidence: &Evidence,
    board: &B,
) -> Option<Position> {
    match score(candidates, board).argmax(board) {
        Some((pos, score)) if score > 0 => Some(pos),
        _ => heatmap::pick(candidates, evidence, board),
    }
}
