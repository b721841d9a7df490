//! A deployed airplane and its damage state.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use airbattle_core::constants::PLANE_CELL_COUNT;
use airbattle_core::enums::{AttackResult, CellKind, Orientation};
use airbattle_core::shape::{PlaneCell, ShapeTemplate};
use airbattle_core::types::Position;

use crate::error::BoardError;

/// Result of striking one airplane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitCheck {
    pub result: AttackResult,
    pub cell_kind: Option<CellKind>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Airplane {
    pub id: u32,
    pub head: Position,
    pub orientation: Orientation,
    cells: [PlaneCell; PLANE_CELL_COUNT],
    hits: HashSet<Position>,
    destroyed: bool,
}

/// Serializable airplane state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirplaneSnapshot {
    pub id: u32,
    pub head: Position,
    pub orientation: Orientation,
    pub hits: Vec<Position>,
    pub destroyed: bool,
}

impl Airplane {
    pub fn new(id: u32, head: Position, orientation: Orientation) -> Self {
        Self {
            id,
            head,
            orientation,
            cells: ShapeTemplate::new().place(head, orientation),
            hits: HashSet::new(),
            destroyed: false,
        }
    }

    pub fn cells(&self) -> &[PlaneCell; PLANE_CELL_COUNT] {
        &self.cells
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn has_cell(&self, pos: Position) -> bool {
        self.cells.iter().any(|c| c.pos == pos)
    }

    pub fn kind_at(&self, pos: Position) -> Option<CellKind> {
        self.cells.iter().find(|c| c.pos == pos).map(|c| c.kind)
    }

    pub fn is_cell_hit(&self, pos: Position) -> bool {
        self.hits.contains(&pos)
    }

    /// Resolve a strike on this airplane.
    ///
    /// A head hit destroys it outright; so does hitting every cell. Fresh
    /// hits on an already destroyed airplane still report `Hit`.
    pub fn check_hit(&mut self, pos: Position) -> HitCheck {
        let Some(kind) = self.kind_at(pos) else {
            return HitCheck {
                result: AttackResult::Miss,
                cell_kind: None,
            };
        };
        let result = if !self.hits.insert(pos) {
            AttackResult::AlreadyAttacked
        } else if self.destroyed {
            AttackResult::Hit
        } else if kind == CellKind::Head || self.hits.len() == PLANE_CELL_COUNT {
            self.destroyed = true;
            AttackResult::Kill
        } else {
            AttackResult::Hit
        };
        HitCheck {
            result,
            cell_kind: Some(kind),
        }
    }

    /// Check bounds, then overlap with the other airplanes.
    pub fn validate_placement(&self, board_size: i32, others: &[Airplane]) -> Result<(), BoardError> {
        if !self.cells.iter().all(|c| c.pos.in_bounds(board_size)) {
            return Err(BoardError::OutOfBounds { id: self.id });
        }
        for other in others.iter().filter(|o| o.id != self.id) {
            if let Some(cell) = self.cells.iter().find(|c| other.has_cell(c.pos)) {
                return Err(BoardError::Overlap {
                    id: self.id,
                    other: other.id,
                    at: cell.pos,
                });
            }
        }
        Ok(())
    }

    /// Try random heads and orientations until one fits.
    pub fn random<R: Rng + ?Sized>(
        rng: &mut R,
        board_size: i32,
        others: &[Airplane],
        id: u32,
        max_attempts: usize,
    ) -> Option<Airplane> {
        for _ in 0..max_attempts {
            let head = Position::new(rng.gen_range(0..board_size), rng.gen_range(0..board_size));
            let orientation = *Orientation::ALL.choose(rng)?;
            let airplane = Airplane::new(id, head, orientation);
            if airplane.validate_placement(board_size, others).is_ok() {
                return Some(airplane);
            }
        }
        None
    }

    /// Clear damage, keeping the placement.
    pub fn repair(&mut self) {
        self.hits.clear();
        self.destroyed = false;
    }

    pub fn snapshot(&self) -> AirplaneSnapshot {
        let mut hits: Vec<Position> = self.hits.iter().copied().collect();
        hits.sort();
        AirplaneSnapshot {
            id: self.id,
            head: self.head,
            orientation: self.orientation,
            hits,
            destroyed: self.destroyed,
        }
    }

    pub fn from_snapshot(snapshot: &AirplaneSnapshot) -> Self {
        let mut airplane = Airplane::new(snapshot.id, snapshot.head, snapshot.orientation);
        airplane.hits = snapshot.hits.iter().copied().collect();
        airplane.destroyed = snapshot.destroyed;
        airplane
    }
}
