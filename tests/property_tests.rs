//! Property tests over random operation sequences.

use proptest::prelude::*;

use memory_match::{FlipOutcome, GameEngine, GameState, MatchConfig, TickOutcome};

#[derive(Clone, Debug)]
enum Op {
    Flip(usize),
    Tick,
    ResolvePending,
    Reset,
}

fn op_strategy(deck_size: usize) -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (0..deck_size).prop_map(Op::Flip),
        3 => Just(Op::Tick),
        1 => Just(Op::ResolvePending),
        1 => Just(Op::Reset),
    ]
}

fn small_config(pairs: usize) -> MatchConfig {
    MatchConfig::new().with_symbols(('A'..='Z').take(pairs))
}

fn check_invariants(state: &GameState, pairs: usize) {
    assert_eq!(state.len(), pairs * 2);
    assert!(state.selection().len() <= 2);
    assert_eq!(state.completed, state.all_matched());

    for card in state.cards.iter() {
        let count = state.cards.iter().filter(|c| c.value == card.value).count();
        assert_eq!(count, 2);
        if card.matched {
            assert!(card.flipped);
        }
    }

    for &index in state.selection() {
        assert!(state.cards[index].flipped);
        assert!(!state.cards[index].matched);
    }
    if let [a, b] = state.selection() {
        assert_ne!(a, b);
    }
}

proptest! {
    #[test]
    fn prop_invariants_hold(
        pairs in 1usize..=8,
        seed in any::<u64>(),
        ops in prop::collection::vec(op_strategy(16), 0..200),
    ) {
        let mut engine = GameEngine::new(small_config(pairs), seed).unwrap();
        let deck_size = pairs * 2;

        for op in ops {
            match op {
                Op::Flip(index) => {
                    let result = engine.flip(index);
                    prop_assert_eq!(result.is_err(), index >= deck_size);
                }
                Op::Tick => {
                    engine.tick();
                }
                Op::ResolvePending => {
                    engine.resolve_pending();
                }
                Op::Reset => {
                    engine.reset();
                }
            }
            check_invariants(engine.state(), pairs);
        }
    }

    #[test]
    fn prop_ignored_flips_change_nothing(
        seed in any::<u64>(),
        ops in prop::collection::vec(op_strategy(8), 0..100),
    ) {
        let mut engine = GameEngine::new(small_config(4), seed).unwrap();

        for op in ops {
            let before = engine.state().clone();
            let history_len = engine.history().len();

            match op {
                Op::Flip(index) => {
                    if let Ok(FlipOutcome::Ignored(_)) = engine.flip(index) {
                        prop_assert_eq!(engine.state(), &before);
                        prop_assert_eq!(engine.history().len(), history_len);
                    }
                }
                Op::Tick => {
                    if engine.tick() == TickOutcome::Ignored {
                        prop_assert!(before.completed);
                        prop_assert_eq!(engine.state(), &before);
                    }
                }
                Op::ResolvePending => {
                    engine.resolve_pending();
                }
                Op::Reset => {
                    engine.reset();
                }
            }
        }
    }

    #[test]
    fn prop_moves_count_second_flips(
        seed in any::<u64>(),
        flips in prop::collection::vec(0usize..12, 0..120),
    ) {
        let mut engine = GameEngine::new(small_config(6), seed).unwrap();
        let mut comparisons = 0u32;

        for index in flips {
            match engine.flip(index).unwrap() {
                FlipOutcome::Matched { .. } | FlipOutcome::Mismatched { .. } => comparisons += 1,
                FlipOutcome::Revealed { .. } | FlipOutcome::Ignored(_) => {}
            }
            // Keep the buffer moving
            if engine.state().selection().len() == 2 {
                engine.tick();
            }
        }

        prop_assert_eq!(engine.state().moves, comparisons);
    }

    #[test]
    fn prop_score_accounts_for_every_comparison(
        seed in any::<u64>(),
        flips in prop::collection::vec(0usize..8, 0..120),
    ) {
        let config = small_config(4).with_manual_resolution();
        let mut engine = GameEngine::new(config, seed).unwrap();
        let mut expected = 0i64;

        for index in flips {
            match engine.flip(index).unwrap() {
                FlipOutcome::Matched { time_bonus, .. } => expected += 100 + time_bonus,
                FlipOutcome::Mismatched { ticket, .. } => {
                    expected -= 10;
                    prop_assert!(engine.resolve(ticket));
                }
                _ => {}
            }
        }

        prop_assert_eq!(engine.state().score, expected);
    }
}
