//! Full-board scorers over the surviving candidate set.
//!
//! Each scorer returns the unattacked cell with the highest score. Cells
//! are scanned in row-major order and only a strictly greater score
//! replaces the current best, so ties resolve to the smallest `(row, col)`.

pub mod direct;
pub mod heatmap;
pub mod info_gain;

use airbattle_core::types::Position;
use airbattle_core::BoardQuery;

/// Dense per-cell score accumulator. Cells nothing voted for stay `None`.
#[derive(Debug, Clone)]
pub struct ScoreGrid<T> {
    size: i32,
    cells: Vec<Option<T>>,
}

impl<T> ScoreGrid<T>
where
    T: Copy + PartialOrd + std::ops::AddAssign,
{
    pub fn new(size: i32) -> Self {
        let len = (size.max(0) * size.max(0)) as usize;
        Self {
            size,
            cells: vec![None; len],
        }
    }

    fn index(&self, pos: Position) -> Option<usize> {
        pos.in_bounds(self.size)
            .then(|| (pos.row * self.size + pos.col) as usize)
    }

    pub fn add(&mut self, pos: Position, value: T) {
        if let Some(i) = self.index(pos) {
            match &mut self.cells[i] {
                Some(score) => *score += value,
                slot @ None => *slot = Some(value),
            }
        }
    }

    pub fn set(&mut self, pos: Position, value: T) {
        if let Some(i) = self.index(pos) {
            self.cells[i] = Some(value);
        }
    }

    pub fn get(&self, pos: Position) -> Option<T> {
        self.index(pos).and_then(|i| self.cells[i])
    }

    /// Highest-scoring unattacked cell, ties to the smallest position.
    pub fn argmax<B: BoardQuery + ?Sized>(&self, board: &B) -> Option<(Position, T)> {
        let mut best: Option<(Position, T)> = None;
        for pos in Position::all(self.size) {
            let Some(score) = self.get(pos) else {
                continue;
            };
            if board.is_attacked(pos) {
                continue;
            }
            if best.map_or(true, |(_, b)| score > b) {
                best = Some((pos, score));
            }
        }
        best
    }
}

/// First unattacked cell in row-major order.
pub fn first_unattacked<B: BoardQuery + ?Sized>(board: &B) -> Option<Position> {
    Position::all(board.board_size()).find(|p| !board.is_attacked(*p))
}
