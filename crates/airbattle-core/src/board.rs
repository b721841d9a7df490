//! Read-only board capability handed to targeting strategies.
//!
//! This is the only window a strategy has onto the opponent's board. It
//! deliberately exposes no way to learn where live airplanes sit: ground
//! truth comes only from the attack history, the attacked-cell set, and the
//! cells of airplanes already destroyed.

use std::collections::HashSet;

use crate::outcome::AttackOutcome;
use crate::types::Position;

pub trait BoardQuery {
    /// Side length of the square board.
    fn board_size(&self) -> i32;

    /// Whether the cell has been attacked already.
    fn is_attacked(&self, pos: Position) -> bool;

    /// Chronological, append-only attack history.
    fn attack_history(&self) -> &[AttackOutcome];

    /// Union of all cells of airplanes confirmed destroyed.
    fn destroyed_unit_cells(&self) -> HashSet<Position>;

    /// Number of airplanes not yet destroyed. Public scoreboard information.
    fn live_unit_count(&self) -> usize;

    /// Whether every cell of the board has been attacked.
    fn is_exhausted(&self) -> bool {
        let size = self.board_size();
        Position::all(size).all(|p| self.is_attacked(p))
    }

    /// Unattacked cells in row-major order.
    fn unattacked_cells(&self) -> Vec<Position> {
        Position::all(self.board_size())
            .filter(|p| !self.is_attacked(*p))
            .collect()
    }
}
