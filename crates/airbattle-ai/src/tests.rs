#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use airbattle_core::enums::{AttackResult, CellKind, Difficulty, Orientation, TargetingPhase};
    use airbattle_core::outcome::AttackOutcome;
    use airbattle_core::shape::ShapeTemplate;
    use airbattle_core::types::Position;
    use airbattle_core::BoardQuery;

    use crate::candidates::{generate, CandidatePlane};
    use crate::engine::{TargetSource, TargetingEngine};
    use crate::error::TargetingError;
    use crate::evidence::Evidence;
    use crate::filter;
    use crate::phase::{classify, evaluate, PhaseContext};
    use crate::probe;
    use crate::scoring::{direct, heatmap, info_gain};
    use crate::strategy::{self, FollowUpTargeter, RandomTargeter};

    /// Board whose public record is written by hand.
    struct ScriptedBoard {
        size: i32,
        history: Vec<AttackOutcome>,
        attacked: HashSet<Position>,
        destroyed: HashSet<Position>,
        live: usize,
    }

    impl ScriptedBoard {
        fn new(size: i32, live: usize) -> Self {
            Self {
                size,
                history: Vec::new(),
                attacked: HashSet::new(),
                destroyed: HashSet::new(),
                live,
            }
        }

        fn record(&mut self, outcome: AttackOutcome) {
            self.attacked.insert(outcome.position);
            self.history.push(outcome);
        }

        fn miss(&mut self, row: i32, col: i32) {
            self.record(AttackOutcome::miss(Position::new(row, col)));
        }

        fn hit(&mut self, row: i32, col: i32, owner: u32) {
            self.record(AttackOutcome::hit(Position::new(row, col), Some(owner), None));
        }

        /// Head shot that destroys the airplane placed at `head`.
        fn kill(&mut self, head: Position, orientation: Orientation, owner: u32) {
            self.record(AttackOutcome::kill(head, Some(owner), Some(CellKind::Head)));
            for cell in ShapeTemplate::new().place(head, orientation) {
                self.destroyed.insert(cell.pos);
            }
            self.live -= 1;
        }
    }

    impl BoardQuery for ScriptedBoard {
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
            self.destroyed.clone()
        }

        fn live_unit_count(&self) -> usize {
            self.live
        }
    }

    fn universe(size: i32) -> Vec<CandidatePlane> {
        generate(&ShapeTemplate::new(), size)
    }

    // ---- Candidate generation ----

    #[test]
    fn test_universe_sizes() {
        assert_eq!(universe(10).len(), 168);
        assert_eq!(universe(15).len(), 528);
        assert_eq!(universe(20).len(), 1088);
        assert!(universe(4).is_empty());
    }

    #[test]
    fn test_candidates_are_valid() {
        for plane in universe(10) {
            assert_eq!(plane.cells[0].kind, CellKind::Head);
            assert_eq!(plane.cells[0].pos, plane.head);
            assert!(plane.positions().all(|p| p.in_bounds(10)));
        }
    }

    #[test]
    fn test_engine_rejects_tiny_board() {
        assert_eq!(
            TargetingEngine::new(4).err(),
            Some(TargetingError::BoardTooSmall { size: 4 })
        );
        assert!(TargetingEngine::new(5).is_ok());
    }

    // ---- Evidence ----

    #[test]
    fn test_evidence_separates_active_hits() {
        let mut board = ScriptedBoard::new(10, 2);
        board.miss(0, 0);
        board.kill(Position::new(1, 4), Orientation::Up, 0);
        // Later hit on a body cell of the destroyed airplane.
        board.hit(2, 4, 0);
        board.hit(7, 7, 1);

        let evidence = Evidence::collect(&board);
        assert_eq!(evidence.misses, vec![Position::new(0, 0)]);
        assert_eq!(evidence.active_hits, vec![Position::new(7, 7)]);
        assert_eq!(evidence.destroyed.len(), 10);
        assert_eq!(evidence.live_units, 1);
    }

    #[test]
    fn test_evidence_ignores_rejected_attacks() {
        let mut board = ScriptedBoard::new(10, 1);
        board.hit(3, 3, 0);
        board.history.push(AttackOutcome::rejected(
            Position::new(3, 3),
            AttackResult::AlreadyAttacked,
        ));
        board.history.push(AttackOutcome::rejected(
            Position::new(-1, 3),
            AttackResult::Invalid,
        ));
        let evidence = Evidence::collect(&board);
        assert_eq!(evidence.active_hits, vec![Position::new(3, 3)]);
    }

    // ---- Constraint filter ----

    #[test]
    fn test_single_hit_keeps_only_covering_candidates() {
        let mut board = ScriptedBoard::new(10, 1);
        board.hit(6, 5, 0);
        let all = universe(10);
        let result = filter::apply(&all, &Evidence::collect(&board));

        let expected = all.iter().filter(|p| p.contains(Position::new(6, 5))).count();
        assert_eq!(expected, 38);
        assert_eq!(result.candidates.len(), expected);
        assert!(!result.regenerated);
        assert!(result
            .candidates
            .iter()
            .all(|p| p.contains(Position::new(6, 5))));
    }

    #[test]
    fn test_killed_airplane_cells_are_excluded() {
        let head = Position::new(5, 5);
        let destroyed: HashSet<Position> = ShapeTemplate::new()
            .place(head, Orientation::Up)
            .iter()
            .map(|c| c.pos)
            .collect();

        let mut board = ScriptedBoard::new(10, 1);
        board.kill(head, Orientation::Up, 0);
        assert_eq!(board.destroyed_unit_cells(), destroyed);

        let result = filter::apply(&universe(10), &Evidence::collect(&board));
        assert!(!result.candidates.is_empty());
        for plane in &result.candidates {
            assert!(plane.positions().all(|p| !destroyed.contains(&p)));
        }
    }

    #[test]
    fn test_misses_are_excluded() {
        let mut board = ScriptedBoard::new(10, 3);
        board.miss(4, 4);
        board.miss(5, 5);
        let result = filter::apply(&universe(10), &Evidence::collect(&board));
        for plane in &result.candidates {
            assert!(!plane.contains(Position::new(4, 4)));
            assert!(!plane.contains(Position::new(5, 5)));
        }
    }

    #[test]
    fn test_uncoverable_hits_trigger_regeneration() {
        let mut board = ScriptedBoard::new(10, 2);
        board.hit(1, 2, 0);
        board.hit(8, 7, 1);
        board.miss(5, 5);
        let evidence = Evidence::collect(&board);

        assert!(filter::filter(&universe(10), &evidence).is_empty());
        let result = filter::apply(&universe(10), &evidence);
        assert!(result.regenerated);
        assert!(!result.candidates.is_empty());
        assert!(result
            .candidates
            .iter()
            .all(|p| !p.contains(Position::new(5, 5))));
    }

    #[test]
    fn test_no_regeneration_once_every_airplane_is_dead() {
        let mut board = ScriptedBoard::new(10, 1);
        for pos in Position::all(10) {
            board.miss(pos.row, pos.col);
        }
        board.live = 0;
        let result = filter::apply(&universe(10), &Evidence::collect(&board));
        assert!(result.candidates.is_empty());
        assert!(!result.regenerated);
    }

    // ---- Phase machine ----

    #[test]
    fn test_phase_thresholds() {
        assert_eq!(classify(4, 0), TargetingPhase::Kill);
        assert_eq!(classify(168, 2), TargetingPhase::Kill);
        assert_eq!(classify(5, 0), TargetingPhase::Lock);
        assert_eq!(classify(49, 0), TargetingPhase::Lock);
        assert_eq!(classify(168, 1), TargetingPhase::Lock);
        assert_eq!(classify(50, 0), TargetingPhase::Search);
    }

    #[test]
    fn test_phase_can_fall_back_to_search() {
        let update = evaluate(&PhaseContext {
            phase: TargetingPhase::Kill,
            candidates: 120,
            active_hits: 0,
        });
        assert!(update.phase_changed);
        assert_eq!(update.new_phase, TargetingPhase::Search);

        let update = evaluate(&PhaseContext {
            phase: TargetingPhase::Lock,
            candidates: 30,
            active_hits: 1,
        });
        assert!(!update.phase_changed);
    }

    // ---- Prober ----

    #[test]
    fn test_probe_follows_single_hit() {
        let mut board = ScriptedBoard::new(10, 1);
        board.hit(6, 5, 0);
        let evidence = Evidence::collect(&board);
        let candidates = filter::apply(&universe(10), &evidence).candidates;

        // Up, left and right are each covered by 18 candidates; up wins the tie.
        assert_eq!(
            probe::probe(&candidates, &evidence, &board),
            Some(Position::new(5, 5))
        );
    }

    #[test]
    fn test_probe_extrapolates_aligned_hits() {
        let mut board = ScriptedBoard::new(10, 2);
        board.hit(6, 5, 0);
        board.hit(7, 5, 0);
        let evidence = Evidence::collect(&board);

        let spots = probe::extrapolate(Position::new(6, 5), Position::new(7, 5));
        assert_eq!(spots[0], Position::new(5, 5));
        assert_eq!(spots[1], Position::new(8, 5));
        assert!(spots.contains(&Position::new(6, 4)));

        // Against the full universe, (4,5), (5,5), (6,3), (6,4) and (6,6) each
        // head four placements; the smallest position wins.
        assert_eq!(
            probe::probe(&universe(10), &evidence, &board),
            Some(Position::new(4, 5))
        );
    }

    #[test]
    fn test_probe_skips_without_hits_or_when_narrow() {
        let board = ScriptedBoard::new(10, 1);
        let evidence = Evidence::collect(&board);
        assert_eq!(probe::probe(&universe(10), &evidence, &board), None);
        assert!(!probe::should_probe(20, 1));
        assert!(probe::should_probe(21, 1));
    }

    #[test]
    fn test_diagonal_hits_do_not_extrapolate() {
        assert!(probe::extrapolate(Position::new(1, 1), Position::new(2, 2)).is_empty());
    }

    // ---- Scorers ----

    #[test]
    fn test_heatmap_opening_move() {
        let board = ScriptedBoard::new(10, 3);
        let evidence = Evidence::collect(&board);
        assert_eq!(
            heatmap::pick(&universe(10), &evidence, &board),
            Some(Position::new(4, 4))
        );
    }

    #[test]
    fn test_heatmap_head_weights() {
        let board = ScriptedBoard::new(10, 1);
        let evidence = Evidence::collect(&board);
        assert_eq!(heatmap::head_weight(Position::new(0, 0), 10, &evidence), 95.0);
        assert_eq!(heatmap::head_weight(Position::new(0, 4), 10, &evidence), 65.0);
        assert_eq!(heatmap::head_weight(Position::new(5, 5), 10, &evidence), 35.0);
        assert_eq!(heatmap::head_weight(Position::new(2, 2), 10, &evidence), 15.0);

        let mut board = ScriptedBoard::new(10, 1);
        board.hit(3, 3, 0);
        board.miss(2, 1);
        let evidence = Evidence::collect(&board);
        assert_eq!(
            heatmap::head_weight(Position::new(2, 2), 10, &evidence),
            15.0 + 200.0 - 5.0
        );
    }

    #[test]
    fn test_info_gain_finds_last_open_cell() {
        let mut board = ScriptedBoard::new(10, 1);
        for pos in Position::all(10) {
            if pos != Position::new(3, 7) {
                board.miss(pos.row, pos.col);
            }
        }
        let evidence = Evidence::collect(&board);
        let candidates = filter::apply(&universe(10), &evidence).candidates;
        assert!(candidates.is_empty());
        assert_eq!(
            info_gain::pick(&candidates, &evidence, &board),
            Some(Position::new(3, 7))
        );
        assert_eq!(
            info_gain::pick(&universe(10), &evidence, &board),
            Some(Position::new(3, 7))
        );
    }

    #[test]
    fn test_info_gain_prefers_heads() {
        let board = ScriptedBoard::new(10, 1);
        let evidence = Evidence::collect(&board);
        let only_one = vec![universe(10)[0]];
        let grid = info_gain::score(&only_one, &board);
        let head = only_one[0].head;
        let (best, _) = grid.argmax(&board).unwrap();
        assert_eq!(best, head);
        assert_eq!(info_gain::pick(&only_one, &evidence, &board), Some(head));
    }

    #[test]
    fn test_direct_targets_head_first() {
        let plane = universe(10)[0];
        let mut board = ScriptedBoard::new(10, 1);
        assert_eq!(direct::pick(&[plane], &board), Some(plane.head));

        // With the head ruled out, the first body cell is next.
        board.miss(plane.head.row, plane.head.col);
        assert_eq!(direct::pick(&[plane], &board), Some(plane.cells[1].pos));

        for cell in plane.cells {
            board.attacked.insert(cell.pos);
        }
        assert_eq!(direct::pick(&[plane], &board), None);
    }

    // ---- Engine ----

    #[test]
    fn test_engine_opens_in_search() {
        let mut engine = TargetingEngine::new(10).unwrap();
        let board = ScriptedBoard::new(10, 3);
        let pos = engine.next_attack(&board).unwrap();
        assert_eq!(pos, Position::new(4, 4));
        assert_eq!(engine.state().phase, TargetingPhase::Search);
        assert_eq!(engine.state().last_source, Some(TargetSource::Heatmap));
        assert_eq!(engine.state().candidates.len(), 168);
    }

    #[test]
    fn test_engine_chases_body_hit() {
        let mut engine = TargetingEngine::new(10).unwrap();
        let mut board = ScriptedBoard::new(10, 1);
        board.hit(6, 5, 0);
        engine.on_result(
            Position::new(6, 5),
            &AttackOutcome::hit(Position::new(6, 5), Some(0), Some(CellKind::Body)),
        );
        assert_eq!(engine.state().hit_sequence, vec![Position::new(6, 5)]);
        assert_eq!(engine.state().last_hit, Some(Position::new(6, 5)));

        let pos = engine.next_attack(&board).unwrap();
        assert_eq!(engine.state().candidates.len(), 38);
        assert_eq!(engine.state().phase, TargetingPhase::Lock);
        assert_eq!(engine.state().last_source, Some(TargetSource::Probe));
        assert_eq!(pos, Position::new(5, 5));
    }

    #[test]
    fn test_engine_kill_clears_bookkeeping() {
        let mut engine = TargetingEngine::new(10).unwrap();
        let hit = Position::new(6, 5);
        engine.on_result(hit, &AttackOutcome::hit(hit, Some(0), None));
        let head = Position::new(5, 5);
        engine.on_result(head, &AttackOutcome::kill(head, Some(0), Some(CellKind::Head)));
        assert!(engine.state().hit_sequence.is_empty());
        assert_eq!(engine.state().last_hit, None);
    }

    #[test]
    fn test_engine_counts_regenerations() {
        let mut engine = TargetingEngine::new(10).unwrap();
        let mut board = ScriptedBoard::new(10, 2);
        board.hit(1, 2, 0);
        board.hit(8, 7, 1);
        let pos = engine.next_attack(&board).unwrap();
        assert!(!board.is_attacked(pos));
        assert_eq!(engine.state().regenerations, 1);
        assert_eq!(engine.state().phase, TargetingPhase::Kill);
    }

    #[test]
    fn test_engine_direct_targets_last_candidates() {
        let mut engine = TargetingEngine::new(10).unwrap();
        let mut board = ScriptedBoard::new(10, 1);
        // Miss everything except one airplane's footprint.
        let plane = engine.universe()[40];
        for pos in Position::all(10) {
            if !plane.contains(pos) {
                board.miss(pos.row, pos.col);
            }
        }
        let pos = engine.next_attack(&board).unwrap();
        assert_eq!(engine.state().candidates.len(), 1);
        assert_eq!(engine.state().phase, TargetingPhase::Kill);
        assert_eq!(engine.state().last_source, Some(TargetSource::Direct));
        assert_eq!(pos, plane.head);
    }

    #[test]
    fn test_engine_reports_exhausted_board() {
        let mut engine = TargetingEngine::new(10).unwrap();
        let mut board = ScriptedBoard::new(10, 0);
        for pos in Position::all(10) {
            board.miss(pos.row, pos.col);
        }
        assert_eq!(
            engine.next_attack(&board),
            Err(TargetingError::NoMoveAvailable)
        );
    }

    #[test]
    fn test_engine_reset() {
        let mut engine = TargetingEngine::new(10).unwrap();
        let mut board = ScriptedBoard::new(10, 2);
        board.hit(1, 2, 0);
        board.hit(8, 7, 1);
        engine.next_attack(&board).unwrap();
        let hit = Position::new(1, 2);
        engine.on_result(hit, &AttackOutcome::hit(hit, Some(0), None));

        engine.reset();
        assert_eq!(engine.state().regenerations, 0);
        assert_eq!(engine.state().phase, TargetingPhase::Search);
        assert!(engine.state().hit_sequence.is_empty());
        assert_eq!(engine.state().candidates.len(), engine.universe().len());
    }

    // ---- Lower tiers ----

    #[test]
    fn test_random_targeter_never_repeats() {
        let mut targeter = RandomTargeter::new(7);
        let mut board = ScriptedBoard::new(10, 1);
        for _ in 0..100 {
            let pos = targeter.next_attack(&board).unwrap();
            assert!(!board.is_attacked(pos));
            board.miss(pos.row, pos.col);
        }
        assert_eq!(
            targeter.next_attack(&board),
            Err(TargetingError::NoMoveAvailable)
        );
    }

    #[test]
    fn test_random_targeter_is_seeded() {
        let board = ScriptedBoard::new(10, 1);
        let mut a = RandomTargeter::new(99);
        let mut b = RandomTargeter::new(99);
        for _ in 0..5 {
            assert_eq!(a.next_attack(&board), b.next_attack(&board));
        }
    }

    #[test]
    fn test_follow_up_queues_neighbors_of_hit() {
        let mut targeter = FollowUpTargeter::new(10, 1);
        let mut board = ScriptedBoard::new(10, 1);
        let hit = Position::new(6, 5);
        board.hit(6, 5, 0);
        targeter.on_result(hit, &AttackOutcome::hit(hit, Some(0), Some(CellKind::Body)));

        let queued: Vec<Position> = targeter.queue().iter().copied().collect();
        assert_eq!(
            queued,
            vec![
                Position::new(5, 5),
                Position::new(7, 5),
                Position::new(6, 4),
                Position::new(6, 6),
            ]
        );
        let next = targeter.next_attack(&board).unwrap();
        assert_eq!(next.manhattan_to(&hit), 1);
    }

    #[test]
    fn test_follow_up_prioritizes_hit_axis() {
        let mut targeter = FollowUpTargeter::new(10, 1);
        let mut board = ScriptedBoard::new(10, 1);
        for (row, col) in [(6, 5), (7, 5)] {
            let pos = Position::new(row, col);
            board.hit(row, col, 0);
            targeter.on_result(pos, &AttackOutcome::hit(pos, Some(0), None));
        }
        assert_eq!(targeter.queue().front(), Some(&Position::new(8, 5)));
        assert_eq!(targeter.next_attack(&board).unwrap(), Position::new(8, 5));

        let head = Position::new(5, 5);
        targeter.on_result(head, &AttackOutcome::kill(head, Some(0), Some(CellKind::Head)));
        assert!(targeter.queue().is_empty());
    }

    #[test]
    fn test_strategy_tiers() {
        for difficulty in Difficulty::ALL {
            let opponent = strategy::Strategy::new(difficulty, 10, 3).unwrap();
            assert_eq!(opponent.difficulty(), difficulty);
        }
        assert!(matches!(
            strategy::Strategy::new(Difficulty::Hard, 10, 0).unwrap(),
            strategy::Strategy::Hard(_)
        ));
    }

    #[test]
    fn test_strategy_tracks_hit_sequence() {
        let mut opponent = strategy::Strategy::new(Difficulty::Medium, 10, 3).unwrap();
        let hit = Position::new(6, 5);
        opponent.on_result(hit, &AttackOutcome::hit(hit, Some(0), Some(CellKind::Body)));
        assert_eq!(opponent.hit_sequence(), &[hit]);
        assert_eq!(opponent.last_hit(), Some(hit));
        opponent.reset();
        assert!(opponent.hit_sequence().is_empty());
    }

    // ---- Properties ----

    fn cell() -> impl Strategy<Value = (i32, i32)> {
        (0..10i32, 0..10i32)
    }

    proptest! {
        #[test]
        fn prop_filter_is_sound(
            live in 1..=3usize,
            wreck in proptest::option::of(0..168usize),
            misses in proptest::collection::hash_set(cell(), 0..30),
            hits in proptest::collection::vec(cell(), 0..3),
        ) {
            let all = universe(10);
            let mut board = ScriptedBoard::new(10, live);
            if let Some(index) = wreck {
                let plane = all[index];
                board.kill(plane.head, plane.orientation, 9);
            }
            for &(r, c) in &misses {
                let pos = Position::new(r, c);
                if !board.attacked.contains(&pos) && !board.destroyed.contains(&pos) {
                    board.miss(r, c);
                }
            }
            for (i, &(r, c)) in hits.iter().enumerate() {
                let pos = Position::new(r, c);
                if !board.attacked.contains(&pos) && !board.destroyed.contains(&pos) {
                    board.hit(r, c, i as u32);
                }
            }
            let evidence = Evidence::collect(&board);
            let result = filter::apply(&all, &evidence);

            for plane in &result.candidates {
                prop_assert!(plane.positions().all(|p| !evidence.miss_set.contains(&p)));
                prop_assert!(plane.positions().all(|p| !evidence.destroyed.contains(&p)));
                if !result.regenerated {
                    prop_assert!(evidence.active_hits.iter().all(|h| plane.contains(*h)));
                }
            }
            if evidence.live_units > 0 {
                prop_assert!(!result.candidates.is_empty() || result.regenerated);
            } else {
                prop_assert!(!result.regenerated);
            }
            if result.regenerated {
                prop_assert!(filter::filter(&all, &evidence).is_empty());
            }
        }

        #[test]
        fn prop_candidates_stay_on_board(size in 5..=20i32) {
            for plane in universe(size) {
                prop_assert_eq!(plane.cells[0].kind, CellKind::Head);
                prop_assert!(plane.positions().all(|p| p.in_bounds(size)));
            }
        }
    }
}
