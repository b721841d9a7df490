//! Hard targeting engine.
//!
//! Each call re-derives the candidate set from the full placement universe
//! and the board's public record, classifies the turn, then asks the
//! prober and the phase scorer for a cell. Only hit bookkeeping persists
//! between calls.

use tracing::{debug, trace};

use airbattle_core::constants::DIRECT_TARGET_MAX_CANDIDATES;
use airbattle_core::enums::{AttackResult, TargetingPhase};
use airbattle_core::outcome::AttackOutcome;
use airbattle_core::shape::ShapeTemplate;
use airbattle_core::types::Position;
use airbattle_core::BoardQuery;

use crate::candidates::{self, CandidatePlane};
use crate::error::TargetingError;
use crate::evidence::Evidence;
use crate::filter;
use crate::phase::{self, PhaseContext};
use crate::probe;
use crate::scoring::{direct, first_unattacked, heatmap, info_gain};

/// Which routine chose the last target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetSource {
    Probe,
    Heatmap,
    InformationGain,
    Direct,
    /// No scorer produced a cell; first unattacked cell in row-major order.
    Fallback,
}

/// Per-match engine state.
#[derive(Debug, Clone, Default)]
pub struct EngineState {
    pub phase: TargetingPhase,
    /// Candidates surviving the most recent filter pass.
    pub candidates: Vec<CandidatePlane>,
    pub last_hit: Option<Position>,
    /// Hits on the airplane currently being pursued.
    pub hit_sequence: Vec<Position>,
    /// Times the filter fell back to regeneration this match.
    pub regenerations: u32,
    pub last_source: Option<TargetSource>,
}

pub struct TargetingEngine {
    board_size: i32,
    template: ShapeTemplate,
    universe: Vec<CandidatePlane>,
    state: EngineState,
}

impl TargetingEngine {
    pub fn new(board_size: i32) -> Result<Self, TargetingError> {
        let template = ShapeTemplate::new();
        let universe = candidates::generate(&template, board_size);
        if universe.is_empty() {
            return Err(TargetingError::BoardTooSmall { size: board_size });
        }
        debug!(board_size, placements = universe.len(), "targeting engine ready");
        Ok(Self {
            board_size,
            template,
            state: EngineState {
                candidates: universe.clone(),
                ..EngineState::default()
            },
            universe,
        })
    }

    pub fn board_size(&self) -> i32 {
        self.board_size
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Every legal placement on this board.
    pub fn universe(&self) -> &[CandidatePlane] {
        &self.universe
    }

    /// Choose the next cell to strike.
    pub fn next_attack<B: BoardQuery + ?Sized>(
        &mut self,
        board: &B,
    ) -> Result<Position, TargetingError> {
        debug_assert_eq!(board.board_size(), self.board_size, "board size mismatch");

        let evidence = Evidence::collect(board);
        let filtered = filter::apply(&self.universe, &evidence);
        if filtered.regenerated {
            self.state.regenerations += 1;
        }
        self.state.candidates = filtered.candidates;

        let update = phase::evaluate(&PhaseContext {
            phase: self.state.phase,
            candidates: self.state.candidates.len(),
            active_hits: evidence.active_hits.len(),
        });
        if update.phase_changed {
            debug!(
                from = ?self.state.phase,
                to = ?update.new_phase,
                candidates = self.state.candidates.len(),
                active_hits = evidence.active_hits.len(),
                "targeting phase changed"
            );
        }
        self.state.phase = update.new_phase;

        let (pos, source) = self
            .choose(&evidence, board)
            .ok_or(TargetingError::NoMoveAvailable)?;
        debug_assert!(!board.is_attacked(pos), "engine chose attacked cell {pos}");
        trace!(%pos, ?source, phase = ?self.state.phase, "target chosen");
        self.state.last_source = Some(source);
        Ok(pos)
    }

    fn choose<B: BoardQuery + ?Sized>(
        &self,
        evidence: &Evidence,
        board: &B,
    ) -> Option<(Position, TargetSource)> {
        let candidates = &self.state.candidates;

        if let Some(pos) = probe::probe(candidates, evidence, board) {
            return Some((pos, TargetSource::Probe));
        }

        let scored = match self.state.phase {
            TargetingPhase::Search => {
                heatmap::pick(candidates, evidence, board).map(|p| (p, TargetSource::Heatmap))
            }
            TargetingPhase::Lock => info_gain::pick(candidates, evidence, board)
                .map(|p| (p, TargetSource::InformationGain)),
            TargetingPhase::Kill => {
                let direct = if candidates.len() <= DIRECT_TARGET_MAX_CANDIDATES {
                    direct::pick(candidates, board)
                } else {
                    None
                };
                match direct {
                    Some(p) => Some((p, TargetSource::Direct)),
                    None => info_gain::pick(candidates, evidence, board)
                        .map(|p| (p, TargetSource::InformationGain)),
                }
            }
        };

        scored.or_else(|| first_unattacked(board).map(|p| (p, TargetSource::Fallback)))
    }

    /// Record the outcome of the engine's last attack.
    pub fn on_result(&mut self, pos: Position, outcome: &AttackOutcome) {
        match outcome.result {
            AttackResult::Hit => {
                self.state.last_hit = Some(pos);
                self.state.hit_sequence.push(pos);
            }
            AttackResult::Kill => {
                self.state.last_hit = None;
                self.state.hit_sequence.clear();
            }
            AttackResult::Miss | AttackResult::AlreadyAttacked | AttackResult::Invalid => {}
        }
    }

    /// Clear all state for a new match and rebuild the placement universe.
    pub fn reset(&mut self) {
        self.universe = candidates::generate(&self.template, self.board_size);
        self.state = EngineState {
            candidates: self.universe.clone(),
            ..EngineState::default()
        };
    }
}
