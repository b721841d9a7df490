//! Constraint filter: prune placement hypotheses against the evidence.
//!
//! Every scorer downstream sees only what survives here. A surviving
//! candidate never touches a miss or a destroyed airplane, and covers every
//! active hit. When that leaves nothing while airplanes are still alive
//! (typically two airplanes hit at once, which no single placement can
//! cover) the set is rebuilt from the full universe with the hit-coverage
//! rule dropped.

use tracing::warn;

use crate::candidates::CandidatePlane;
use crate::evidence::Evidence;

/// Output of one filter pass.
#[derive(Debug, Clone, Default)]
pub struct FilterResult {
    pub candidates: Vec<CandidatePlane>,
    /// Whether the recovery path was taken.
    pub regenerated: bool,
}

/// Whether the candidate avoids every miss and every destroyed cell.
pub fn avoids_known_empty(plane: &CandidatePlane, evidence: &Evidence) -> bool {
    plane
        .positions()
        .all(|p| !evidence.miss_set.contains(&p) && !evidence.destroyed.contains(&p))
}

/// Whether the candidate covers every active hit.
pub fn covers_active_hits(plane: &CandidatePlane, evidence: &Evidence) -> bool {
    evidence.active_hits.iter().all(|h| plane.contains(*h))
}

/// Keep candidates consistent with all evidence.
pub fn filter(candidates: &[CandidatePlane], evidence: &Evidence) -> Vec<CandidatePlane> {
    candidates
        .iter()
        .filter(|p| avoids_known_empty(p, evidence) && covers_active_hits(p, evidence))
        .copied()
        .collect()
}

/// Keep candidates that avoid misses and destroyed cells only.
pub fn filter_relaxed(candidates: &[CandidatePlane], evidence: &Evidence) -> Vec<CandidatePlane> {
    candidates
        .iter()
        .filter(|p| avoids_known_empty(p, evidence))
        .copied()
        .collect()
}

/// Filter the full universe, regenerating with relaxed rules if the strict
/// pass empties the set while the opponent still has live airplanes.
pub fn apply(universe: &[CandidatePlane], evidence: &Evidence) -> FilterResult {
    let candidates = filter(universe, evidence);
    if !candidates.is_empty() || evidence.live_units == 0 {
        return FilterResult {
            candidates,
            regenerated: false,
        };
    }

    let candidates = filter_relaxed(universe, evidence);
    warn!(
        active_hits = evidence.active_hits.len(),
        misses = evidence.misses.len(),
        live_units = evidence.live_units,
        survivors = candidates.len(),
        "candidate set exhausted; regenerated without hit coverage"
    );
    FilterResult {
        candidates,
        regenerated: true,
    }
}
