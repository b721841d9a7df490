//! Opportunistic line probing from recent hits.
//!
//! While the candidate set is still too wide for lock-quality scoring but a
//! live hit exists, chase it directly: extrapolate aligned hits to where a
//! head is most likely, or else try the neighbour of the latest hit that
//! the most candidates cover.

use std::collections::HashMap;

use airbattle_core::constants::PROBE_MIN_CANDIDATES;
use airbattle_core::types::Position;
use airbattle_core::BoardQuery;

use crate::candidates::CandidatePlane;
use crate::evidence::Evidence;

/// Whether probing applies this turn.
pub fn should_probe(candidates: usize, active_hits: usize) -> bool {
    active_hits >= 1 && candidates > PROBE_MIN_CANDIDATES
}

/// Pick a probe target, or `None` to fall through to phase scoring.
pub fn probe<B: BoardQuery + ?Sized>(
    candidates: &[CandidatePlane],
    evidence: &Evidence,
    board: &B,
) -> Option<Position> {
    if !should_probe(candidates.len(), evidence.active_hits.len()) {
        return None;
    }
    if let Some(target) = head_from_aligned_hits(candidates, evidence, board) {
        return Some(target);
    }
    let latest = evidence.latest_hit()?;
    best_neighbor(latest, candidates, board)
}

/// Cells one and two past each end of the span along the line, then one
/// and two either side of the span midpoint across it.
pub fn extrapolate(a: Position, b: Position) -> Vec<Position> {
    if a.row == b.row {
        let row = a.row;
        let (lo, hi) = (a.col.min(b.col), a.col.max(b.col));
        let mid = (lo + hi) / 2;
        vec![
            Position::new(row, lo - 1),
            Position::new(row, hi + 1),
            Position::new(row, lo - 2),
            Position::new(row, hi + 2),
            Position::new(row - 1, mid),
            Position::new(row + 1, mid),
            Position::new(row - 2, mid),
            Position::new(row + 2, mid),
        ]
    } else if a.col == b.col {
        let col = a.col;
        let (lo, hi) = (a.row.min(b.row), a.row.max(b.row));
        let mid = (lo + hi) / 2;
        vec![
            Position::new(lo - 1, col),
            Position::new(hi + 1, col),
            Position::new(lo - 2, col),
            Position::new(hi + 2, col),
            Position::new(mid, col - 1),
            Position::new(mid, col + 1),
            Position::new(mid, col - 2),
            Position::new(mid, col + 2),
        ]
    } else {
        Vec::new()
    }
}

/// Most likely head cell suggested by any pair of aligned active hits.
fn head_from_aligned_hits<B: BoardQuery + ?Sized>(
    candidates: &[CandidatePlane],
    evidence: &Evidence,
    board: &B,
) -> Option<Position> {
    let hits = &evidence.active_hits;
    if hits.len() < 2 {
        return None;
    }

    let mut head_counts: HashMap<Position, usize> = HashMap::new();
    for plane in candidates {
        *head_counts.entry(plane.head).or_default() += 1;
    }

    let size = board.board_size();
    let mut best: Option<(Position, usize)> = None;
    for (i, &a) in hits.iter().enumerate() {
        for &b in &hits[i + 1..] {
            for pos in extrapolate(a, b) {
                if !pos.in_bounds(size) || board.is_attacked(pos) {
                    continue;
                }
                let score = head_counts.get(&pos).copied().unwrap_or(0);
                if score == 0 {
                    continue;
                }
                let better = match best {
                    None => true,
                    Some((best_pos, best_score)) => {
                        score > best_score || (score == best_score && pos < best_pos)
                    }
                };
                if better {
                    best = Some((pos, score));
                }
            }
        }
    }
    best.map(|(pos, _)| pos)
}

/// Unattacked neighbour of `hit` covered by the most candidates, ties in
/// up/down/left/right order.
fn best_neighbor<B: BoardQuery + ?Sized>(
    hit: Position,
    candidates: &[CandidatePlane],
    board: &B,
) -> Option<Position> {
    let mut best: Option<(Position, usize)> = None;
    for pos in hit.neighbors(board.board_size()) {
        if board.is_attacked(pos) {
            continue;
        }
        let count = candidates.iter().filter(|p| p.contains(pos)).count();
        if best.map_or(true, |(_, b)| count > b) {
            best = Some((pos, count));
        }
    }
    best.map(|(pos, _)| pos)
}
