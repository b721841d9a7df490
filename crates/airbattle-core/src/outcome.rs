//! Attack outcomes recorded by the board and consumed by the engine.

use serde::{Deserialize, Serialize};

use crate::enums::{AttackResult, CellKind};
use crate::types::Position;

/// One resolved attack. Produced by the board, read-only to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackOutcome {
    pub position: Position,
    pub result: AttackResult,
    /// Airplane that was struck, if any and if known.
    pub owner_id: Option<u32>,
    /// Kind of cell that was struck, if known.
    pub cell_kind: Option<CellKind>,
}

impl AttackOutcome {
    pub fn miss(position: Position) -> Self {
        Self {
            position,
            result: AttackResult::Miss,
            owner_id: None,
            cell_kind: None,
        }
    }

    pub fn hit(position: Position, owner_id: Option<u32>, cell_kind: Option<CellKind>) -> Self {
        Self {
            position,
            result: AttackResult::Hit,
            owner_id,
            cell_kind,
        }
    }

    pub fn kill(position: Position, owner_id: Option<u32>, cell_kind: Option<CellKind>) -> Self {
        Self {
            position,
            result: AttackResult::Kill,
            owner_id,
            cell_kind,
        }
    }

    /// Outcome for an attack that was rejected and not recorded.
    pub fn rejected(position: Position, result: AttackResult) -> Self {
        Self {
            position,
            result,
            owner_id: None,
            cell_kind: None,
        }
    }

    /// Whether the head was struck.
    pub fn was_head(&self) -> bool {
        self.cell_kind == Some(CellKind::Head)
    }
}

/// Running attack statistics for one board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    /// Hits including kills.
    pub hits: u32,
    pub misses: u32,
    pub kills: u32,
}

impl GameStats {
    pub fn total_attacks(&self) -> u32 {
        self.hits + self.misses
    }

    /// Fraction of attacks that struck an airplane.
    pub fn accuracy(&self) -> f64 {
        match self.total_attacks() {
            0 => 0.0,
            n => self.hits as f64 / n as f64,
        }
    }
}
