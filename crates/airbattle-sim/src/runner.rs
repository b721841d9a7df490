//! Seeded solo matches: one strategy against one hidden deployment.

use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use airbattle_ai::{Strategy, TargetingError};
use airbattle_core::board::BoardQuery;
use airbattle_core::enums::Difficulty;
use airbattle_core::modes::ModeConfig;
use airbattle_core::outcome::{AttackOutcome, GameStats};

use crate::board::Board;
use crate::error::MatchError;

/// Configuration for one match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// RNG seed. Same seed, same deployment and same moves.
    pub seed: u64,
    pub mode: ModeConfig,
    pub difficulty: Difficulty,
    /// Stop early after this many turns.
    pub max_turns: Option<u32>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            mode: ModeConfig::default(),
            difficulty: Difficulty::default(),
            max_turns: None,
        }
    }
}

impl MatchConfig {
    pub fn from_json(text: &str) -> Result<Self, MatchError> {
        let config: MatchConfig = serde_json::from_str(text)?;
        config.mode.validate()?;
        Ok(config)
    }
}

/// Summary of a finished match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub seed: u64,
    pub difficulty: Difficulty,
    pub board_size: i32,
    pub airplanes: usize,
    pub turns: u32,
    pub stats: GameStats,
    /// Whether every airplane was destroyed.
    pub completed: bool,
    pub regenerations: u32,
    /// Slowest single move decision, in microseconds.
    pub max_move_micros: u64,
}

pub struct MatchRunner {
    config: MatchConfig,
    board: Board,
    strategy: Strategy,
    turns: u32,
    max_move_micros: u64,
}

impl MatchRunner {
    /// Deploy a random fleet from the config seed and build the strategy.
    pub fn new(config: MatchConfig) -> Result<Self, MatchError> {
        config.mode.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mut board = Board::new(config.mode.board_size, config.mode.airplanes)?;
        board.place_randomly(&mut rng)?;
        Self::with_board(config, board)
    }

    /// Play against a prepared board.
    pub fn with_board(config: MatchConfig, board: Board) -> Result<Self, MatchError> {
        let strategy = Strategy::new(config.difficulty, board.size(), config.seed.wrapping_add(1))?;
        Ok(Self {
            config,
            board,
            strategy,
            turns: 0,
            max_move_micros: 0,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn is_finished(&self) -> bool {
        self.board.all_destroyed()
            || self.board.is_exhausted()
            || self.config.max_turns.is_some_and(|max| self.turns >= max)
    }

    /// Play one turn.
    pub fn step(&mut self) -> Result<AttackOutcome, TargetingError> {
        let started = Instant::now();
        let pos = self.strategy.next_attack(&self.board)?;
        let elapsed = started.elapsed().as_micros() as u64;
        self.max_move_micros = self.max_move_micros.max(elapsed);

        let outcome = self.board.process_attack(pos);
        self.strategy.on_result(pos, &outcome);
        self.turns += 1;
        debug!(turn = self.turns, %pos, result = ?outcome.result, "turn played");
        Ok(outcome)
    }

    /// Play until the fleet is destroyed, the board runs out, or the turn
    /// limit is reached.
    pub fn play(mut self) -> MatchReport {
        while !self.is_finished() {
            if let Err(err) = self.step() {
                debug!(%err, "strategy stopped");
                break;
            }
        }
        let report = self.report();
        info!(
            seed = report.seed,
            difficulty = report.difficulty.name(),
            turns = report.turns,
            completed = report.completed,
            "match finished"
        );
        report
    }

    pub fn report(&self) -> MatchReport {
        MatchReport {
            seed: self.config.seed,
            difficulty: self.config.difficulty,
            board_size: self.board.size(),
            airplanes: self.board.airplane_count(),
            turns: self.turns,
            stats: self.board.stats(),
            completed: self.board.all_destroyed(),
            regenerations: self.strategy.regenerations(),
            max_move_micros: self.max_move_micros,
        }
    }
}
