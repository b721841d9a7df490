//! Targeting phase state machine.
//!
//! The phase reflects current uncertainty, not game progress, so it may
//! move back to Search once an airplane is destroyed and its hits stop
//! counting as active.

use airbattle_core::constants::*;
use airbattle_core::enums::TargetingPhase;

/// Input to the phase machine for one turn.
pub struct PhaseContext {
    pub phase: TargetingPhase,
    pub candidates: usize,
    pub active_hits: usize,
}

/// Output from the phase machine.
pub struct PhaseUpdate {
    pub new_phase: TargetingPhase,
    pub phase_changed: bool,
}

/// Phase implied by the surviving candidate count and active hits.
pub fn classify(candidates: usize, active_hits: usize) -> TargetingPhase {
    if candidates < KILL_CANDIDATE_THRESHOLD || active_hits >= KILL_ACTIVE_HITS {
        TargetingPhase::Kill
    } else if candidates < LOCK_CANDIDATE_THRESHOLD || active_hits >= LOCK_ACTIVE_HITS {
        TargetingPhase::Lock
    } else {
        TargetingPhase::Search
    }
}

/// Evaluate the machine for one turn.
pub fn evaluate(ctx: &PhaseContext) -> PhaseUpdate {
    let new_phase = classify(ctx.candidates, ctx.active_hits);
    PhaseUpdate {
        new_phase,
        phase_changed: new_phase != ctx.phase,
    }
}
