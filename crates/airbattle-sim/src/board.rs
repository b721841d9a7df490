//! Reference board: hidden deployment plus the public attack record.

use std::collections::HashSet;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use airbattle_core::board::BoardQuery;
use airbattle_core::constants::{PLACEMENT_ATTEMPTS, PLACEMENT_RETRIES};
use airbattle_core::enums::{AttackResult, CellState};
use airbattle_core::modes::{validate_airplane_count, validate_board_size};
use airbattle_core::outcome::{AttackOutcome, GameStats};
use airbattle_core::types::Position;

use crate::airplane::{Airplane, AirplaneSnapshot};
use crate::error::BoardError;

#[derive(Debug, Clone)]
pub struct Board {
    size: i32,
    airplane_count: usize,
    airplanes: Vec<Airplane>,
    history: Vec<AttackOutcome>,
    attacked: HashSet<Position>,
}

/// Serializable board state, including the hidden deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub size: i32,
    pub airplane_count: usize,
    pub airplanes: Vec<AirplaneSnapshot>,
    pub history: Vec<AttackOutcome>,
}

impl Board {
    pub fn new(size: i32, airplane_count: usize) -> Result<Self, BoardError> {
        validate_board_size(size)?;
        validate_airplane_count(airplane_count, size)?;
        Ok(Self {
            size,
            airplane_count,
            airplanes: Vec::with_capacity(airplane_count),
            history: Vec::new(),
            attacked: HashSet::new(),
        })
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn airplane_count(&self) -> usize {
        self.airplane_count
    }

    pub fn airplanes(&self) -> &[Airplane] {
        &self.airplanes
    }

    pub fn is_deployment_complete(&self) -> bool {
        self.airplanes.len() == self.airplane_count
    }

    pub fn add_airplane(&mut self, airplane: Airplane) -> Result<(), BoardError> {
        if self.is_deployment_complete() {
            return Err(BoardError::FleetFull {
                capacity: self.airplane_count,
            });
        }
        airplane.validate_placement(self.size, &self.airplanes)?;
        self.airplanes.push(airplane);
        Ok(())
    }

    pub fn remove_airplane(&mut self, id: u32) -> Result<Airplane, BoardError> {
        let index = self
            .airplanes
            .iter()
            .position(|a| a.id == id)
            .ok_or(BoardError::UnknownAirplane(id))?;
        Ok(self.airplanes.remove(index))
    }

    pub fn clear_airplanes(&mut self) {
        self.airplanes.clear();
    }

    /// Deploy the full fleet at random, starting over on a dead end.
    pub fn place_randomly<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        let attempts = PLACEMENT_ATTEMPTS.max(self.airplane_count * PLACEMENT_ATTEMPTS);
        for retry in 0..PLACEMENT_RETRIES {
            self.clear_airplanes();
            for id in 0..self.airplane_count {
                match Airplane::random(rng, self.size, &self.airplanes, id as u32, attempts) {
                    Some(airplane) => self.airplanes.push(airplane),
                    None => break,
                }
            }
            if self.is_deployment_complete() {
                debug!(retry, airplanes = self.airplane_count, "fleet deployed");
                return Ok(());
            }
        }
        self.clear_airplanes();
        Err(BoardError::PlacementFailed {
            count: self.airplane_count,
            size: self.size,
        })
    }

    pub fn airplane_at(&self, pos: Position) -> Option<&Airplane> {
        self.airplanes.iter().find(|a| a.has_cell(pos))
    }

    /// Resolve an attack. Out-of-bounds and repeated attacks are rejected
    /// and leave no trace in the history.
    pub fn process_attack(&mut self, pos: Position) -> AttackOutcome {
        if !pos.in_bounds(self.size) {
            return AttackOutcome::rejected(pos, AttackResult::Invalid);
        }
        if !self.attacked.insert(pos) {
            return AttackOutcome::rejected(pos, AttackResult::AlreadyAttacked);
        }
        let mut outcome = AttackOutcome::miss(pos);
        for airplane in self.airplanes.iter_mut() {
            let check = airplane.check_hit(pos);
            match check.result {
                AttackResult::Hit => {
                    outcome = AttackOutcome::hit(pos, Some(airplane.id), check.cell_kind);
                    break;
                }
                AttackResult::Kill => {
                    outcome = AttackOutcome::kill(pos, Some(airplane.id), check.cell_kind);
                    break;
                }
                _ => {}
            }
        }
        debug!(%pos, result = ?outcome.result, owner = ?outcome.owner_id, "attack resolved");
        self.history.push(outcome);
        outcome
    }

    /// Record an attack resolved elsewhere, e.g. by a remote opponent.
    /// Rejected results, repeats and out-of-bounds positions are ignored.
    pub fn record_external_attack(
        &mut self,
        pos: Position,
        result: AttackResult,
        owner_id: Option<u32>,
    ) -> Option<AttackOutcome> {
        let outcome = match result {
            AttackResult::Miss => AttackOutcome::miss(pos),
            AttackResult::Hit => AttackOutcome::hit(pos, owner_id, None),
            AttackResult::Kill => AttackOutcome::kill(pos, owner_id, None),
            AttackResult::AlreadyAttacked | AttackResult::Invalid => return None,
        };
        if !pos.in_bounds(self.size) || !self.attacked.insert(pos) {
            return None;
        }
        self.history.push(outcome);
        Some(outcome)
    }

    pub fn stats(&self) -> GameStats {
        let mut stats = GameStats::default();
        for outcome in &self.history {
            match outcome.result {
                AttackResult::Miss => stats.misses += 1,
                AttackResult::Hit => stats.hits += 1,
                AttackResult::Kill => {
                    stats.hits += 1;
                    stats.kills += 1;
                }
                _ => {}
            }
        }
        stats
    }

    pub fn all_destroyed(&self) -> bool {
        !self.airplanes.is_empty() && self.airplanes.iter().all(Airplane::is_destroyed)
    }

    pub fn remaining_airplanes(&self) -> usize {
        self.airplanes.iter().filter(|a| !a.is_destroyed()).count()
    }

    /// Display state of a cell. Live airplanes are shown only with `reveal`.
    pub fn cell_state(&self, pos: Position, reveal: bool) -> CellState {
        let airplane = self.airplane_at(pos);
        if self.attacked.contains(&pos) {
            return match airplane {
                Some(a) if a.is_destroyed() => CellState::Killed,
                Some(_) => CellState::Hit,
                None => CellState::Miss,
            };
        }
        match airplane {
            Some(a) if a.is_destroyed() => CellState::Killed,
            Some(_) if reveal => CellState::Airplane,
            _ => CellState::Empty,
        }
    }

    /// Clear attacks and damage, keeping the deployment.
    pub fn reset(&mut self) {
        self.history.clear();
        self.attacked.clear();
        for airplane in self.airplanes.iter_mut() {
            airplane.repair();
        }
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            size: self.size,
            airplane_count: self.airplane_count,
            airplanes: self.airplanes.iter().map(Airplane::snapshot).collect(),
            history: self.history.clone(),
        }
    }

    pub fn restore(snapshot: &BoardSnapshot) -> Result<Self, BoardError> {
        let mut board = Board::new(snapshot.size, snapshot.airplane_count)?;
        for saved in &snapshot.airplanes {
            board.add_airplane(Airplane::from_snapshot(saved))?;
        }
        board.history = snapshot.history.clone();
        board.attacked = snapshot
            .history
            .iter()
            .map(|outcome| outcome.position)
            .collect();
        Ok(board)
    }
}

impl BoardQuery for Board {
    fn board_size(&self) -> i32 {
        self.size
    }

    fn is_attacked(&self, pos: Position) -> bool {
        self.attacked.contains(&pos)
    }

    fn attack_history(&self) -> &[AttackOutcome] {
        &self.history
    }

    fn destroyed_unit_cells(&self) -> HashSet<Position> {
        self.airplanes
            .iter()
            .filter(|a| a.is_destroyed())
            .flat_map(|a| a.cells().iter().map(|c| c.pos))
            .collect()
    }

    fn live_unit_count(&self) -> usize {
        if self.airplanes.is_empty() {
            // Tracking board for a remote fleet: only the kill count is known.
            let kills = self
                .history
                .iter()
                .filter(|o| o.result == AttackResult::Kill)
                .count();
            return self.airplane_count.saturating_sub(kills);
        }
        self.remaining_airplanes()
    }
}
