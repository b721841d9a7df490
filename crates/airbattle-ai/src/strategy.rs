//! Difficulty tiers behind a single attack/result contract.

use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use airbattle_core::enums::{AttackResult, Difficulty};
use airbattle_core::outcome::AttackOutcome;
use airbattle_core::types::Position;
use airbattle_core::BoardQuery;

use crate::engine::TargetingEngine;
use crate::error::TargetingError;

/// Easy tier: uniform random over unattacked cells.
pub struct RandomTargeter {
    seed: u64,
    rng: ChaCha8Rng,
}

impl RandomTargeter {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn next_attack<B: BoardQuery + ?Sized>(
        &mut self,
        board: &B,
    ) -> Result<Position, TargetingError> {
        board
            .unattacked_cells()
            .choose(&mut self.rng)
            .copied()
            .ok_or(TargetingError::NoMoveAvailable)
    }

    /// Restart the random stream from the original seed.
    pub fn reset(&mut self) {
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
    }
}

/// Medium tier: random search, then drain a queue of cells around hits.
pub struct FollowUpTargeter {
    board_size: i32,
    random: RandomTargeter,
    queue: VecDeque<Position>,
    last_hit: Option<Position>,
    hit_sequence: Vec<Position>,
}

impl FollowUpTargeter {
    pub fn new(board_size: i32, seed: u64) -> Self {
        Self {
            board_size,
            random: RandomTargeter::new(seed),
            queue: VecDeque::new(),
            last_hit: None,
            hit_sequence: Vec::new(),
        }
    }

    /// Cells waiting to be probed, front first.
    pub fn queue(&self) -> &VecDeque<Position> {
        &self.queue
    }

    pub fn next_attack<B: BoardQuery + ?Sized>(
        &mut self,
        board: &B,
    ) -> Result<Position, TargetingError> {
        while let Some(target) = self.queue.pop_front() {
            if !board.is_attacked(target) {
                return Ok(target);
            }
        }
        self.random.next_attack(board)
    }

    pub fn on_result(&mut self, pos: Position, outcome: &AttackOutcome) {
        match outcome.result {
            AttackResult::Hit => {
                self.last_hit = Some(pos);
                self.hit_sequence.push(pos);
                self.enqueue_neighbors(pos);
            }
            AttackResult::Kill => {
                self.queue.clear();
                self.last_hit = None;
                self.hit_sequence.clear();
            }
            AttackResult::Miss | AttackResult::AlreadyAttacked | AttackResult::Invalid => {}
        }
    }

    /// Queue the hit's neighbours; with a previous hit, cells on the same
    /// axis jump the queue.
    fn enqueue_neighbors(&mut self, pos: Position) {
        let prev = match self.hit_sequence.len() {
            n if n > 1 => Some(self.hit_sequence[n - 2]),
            _ => None,
        };
        for cell in pos.neighbors(self.board_size) {
            let aligned = prev.is_some_and(|p| {
                (p.row == pos.row && cell.row == pos.row)
                    || (p.col == pos.col && cell.col == pos.col)
            });
            if aligned {
                self.queue.push_front(cell);
            } else {
                self.queue.push_back(cell);
            }
        }
    }

    pub fn reset(&mut self) {
        self.queue.clear();
        self.last_hit = None;
        self.hit_sequence.clear();
        self.random.reset();
    }
}

/// One opponent of a chosen difficulty.
pub enum Strategy {
    Easy(RandomTargeter),
    Medium(FollowUpTargeter),
    Hard(Box<TargetingEngine>),
}

impl Strategy {
    pub fn new(difficulty: Difficulty, board_size: i32, seed: u64) -> Result<Self, TargetingError> {
        Ok(match difficulty {
            Difficulty::Easy => Strategy::Easy(RandomTargeter::new(seed)),
            Difficulty::Medium => Strategy::Medium(FollowUpTargeter::new(board_size, seed)),
            Difficulty::Hard => Strategy::Hard(Box::new(TargetingEngine::new(board_size)?)),
        })
    }

    pub fn difficulty(&self) -> Difficulty {
        match self {
            Strategy::Easy(_) => Difficulty::Easy,
            Strategy::Medium(_) => Difficulty::Medium,
            Strategy::Hard(_) => Difficulty::Hard,
        }
    }

    pub fn next_attack<B: BoardQuery + ?Sized>(
        &mut self,
        board: &B,
    ) -> Result<Position, TargetingError> {
        match self {
            Strategy::Easy(t) => t.next_attack(board),
            Strategy::Medium(t) => t.next_attack(board),
            Strategy::Hard(engine) => engine.next_attack(board),
        }
    }

    pub fn on_result(&mut self, pos: Position, outcome: &AttackOutcome) {
        match self {
            Strategy::Easy(_) => {}
            Strategy::Medium(t) => t.on_result(pos, outcome),
            Strategy::Hard(engine) => engine.on_result(pos, outcome),
        }
    }

    pub fn reset(&mut self) {
        match self {
            Strategy::Easy(t) => t.reset(),
            Strategy::Medium(t) => t.reset(),
            Strategy::Hard(engine) => engine.reset(),
        }
    }

    /// Hits on the airplane currently being pursued. Easy keeps none.
    pub fn hit_sequence(&self) -> &[Position] {
        match self {
            Strategy::Easy(_) => &[],
            Strategy::Medium(t) => &t.hit_sequence,
            Strategy::Hard(engine) => &engine.state().hit_sequence,
        }
    }

    pub fn last_hit(&self) -> Option<Position> {
        match self {
            Strategy::Easy(_) => None,
            Strategy::Medium(t) => t.last_hit,
            Strategy::Hard(engine) => engine.state().last_hit,
        }
    }

    /// Filter regenerations so far; only the hard engine tracks them.
    pub fn regenerations(&self) -> u32 {
        match self {
            Strategy::Hard(engine) => engine.state().regenerations,
            _ => 0,
        }
    }
}
