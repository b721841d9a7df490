//! Evidence extraction from the public attack record.

use std::collections::HashSet;

use tracing::warn;

use airbattle_core::enums::AttackResult;
use airbattle_core::types::Position;
use airbattle_core::BoardQuery;

/// Ground truth gathered from one board for one turn.
#[derive(Debug, Clone, Default)]
pub struct Evidence {
    pub board_size: i32,
    /// Recorded misses, in attack order.
    pub misses: Vec<Position>,
    pub miss_set: HashSet<Position>,
    /// Cells of airplanes confirmed destroyed.
    pub destroyed: HashSet<Position>,
    /// Hits not attributable to a destroyed airplane, in attack order.
    pub active_hits: Vec<Position>,
    pub live_units: usize,
}

impl Evidence {
    /// Read the board's public record.
    ///
    /// Out-of-bounds or duplicate records are a broken collaborator: they
    /// assert in debug builds and are skipped otherwise.
    pub fn collect<B: BoardQuery + ?Sized>(board: &B) -> Self {
        let board_size = board.board_size();
        let history = board.attack_history();
        let destroyed = board.destroyed_unit_cells();

        let killed_owners: HashSet<u32> = history
            .iter()
            .filter(|o| o.result == AttackResult::Kill)
            .filter_map(|o| o.owner_id)
            .collect();

        let mut seen = HashSet::new();
        let mut misses = Vec::new();
        let mut active_hits = Vec::new();

        for outcome in history {
            if matches!(
                outcome.result,
                AttackResult::AlreadyAttacked | AttackResult::Invalid
            ) {
                continue;
            }
            let pos = outcome.position;
            if !pos.in_bounds(board_size) {
                debug_assert!(false, "attack history contains out-of-bounds {pos:?}");
                warn!(row = pos.row, col = pos.col, "skipping out-of-bounds attack record");
                continue;
            }
            if !seen.insert(pos) {
                debug_assert!(false, "attack history records {pos} twice");
                warn!(%pos, "skipping duplicate attack record");
                continue;
            }

            match outcome.result {
                AttackResult::Miss => misses.push(pos),
                AttackResult::Hit => {
                    let owner_dead = outcome
                        .owner_id
                        .is_some_and(|id| killed_owners.contains(&id));
                    if !owner_dead && !destroyed.contains(&pos) {
                        active_hits.push(pos);
                    }
                }
                // Covered by the destroyed-cell set.
                AttackResult::Kill => {}
                AttackResult::AlreadyAttacked | AttackResult::Invalid => {}
            }
        }

        let miss_set = misses.iter().copied().collect();
        Self {
            board_size,
            misses,
            miss_set,
            destroyed,
            active_hits,
            live_units: board.live_unit_count(),
        }
    }

    /// Most recent active hit.
    pub fn latest_hit(&self) -> Option<Position> {
        self.active_hits.last().copied()
    }
}
