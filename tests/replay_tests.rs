//! Deterministic replay tests.
//!
//! A dealt deck plus the recorded history must reproduce the game exactly.

use memory_match::{Action, EngineError, GameEngine, GameState, MatchConfig, Symbol};

/// Play with perfect recall: remember every face seen, pair as soon as possible.
fn play_to_completion(engine: &mut GameEngine) {
    let mut turns = 0;
    while !engine.state().completed && turns < 1000 {
        let state = engine.state();
        let hidden: Vec<usize> = (0..state.len())
            .filter(|&i| state.cards[i].is_selectable())
            .collect();

        // Flip the first hidden card, then its twin if it is known, else the next one
        let first = hidden[0];
        let twin = (0..state.len())
            .find(|&i| i != first && state.cards[i].value == state.cards[first].value)
            .filter(|&i| state.cards[i].is_selectable());
        let second = if turns % 3 == 0 { hidden[1] } else { twin.unwrap_or(hidden[1]) };

        engine.flip(first).unwrap();
        engine.flip(second).unwrap();
        engine.tick();
        turns += 1;
    }
}

fn history_actions(engine: &GameEngine) -> Vec<Action> {
    engine.history().iter().map(|r| r.action).collect()
}

fn assert_same_game(a: &GameState, b: &GameState) {
    assert_eq!(a.cards, b.cards);
    assert_eq!(a.score, b.score);
    assert_eq!(a.moves, b.moves);
    assert_eq!(a.elapsed, b.elapsed);
    assert_eq!(a.completed, b.completed);
}

#[test]
fn test_replay_full_game() {
    let config = MatchConfig::default();
    let mut engine = GameEngine::new(config.clone(), 2024).unwrap();
    let deck = engine.state().initial_deck();

    play_to_completion(&mut engine);
    assert!(engine.state().completed);

    let replayed = GameEngine::replay(config, &deck, history_actions(&engine)).unwrap();

    assert_same_game(engine.state(), replayed.state());
    assert_eq!(replayed.history().len(), engine.history().len());
}

#[test]
fn test_replay_with_manual_resolution() {
    let config = MatchConfig::new().with_symbols(['A', 'B', 'C']).with_manual_resolution();
    let deck: Vec<Symbol> = "ABCCBA".chars().map(Symbol::new).collect();
    let mut engine = GameEngine::with_deck(config.clone(), &deck).unwrap();

    engine.flip(0).unwrap();
    engine.flip(1).unwrap();
    engine.tick();
    engine.resolve_pending();
    engine.flip(0).unwrap();
    engine.flip(5).unwrap();

    let actions = history_actions(&engine);
    assert!(actions.contains(&Action::Resolve));

    let replayed = GameEngine::replay(config, &deck, actions).unwrap();
    assert_same_game(engine.state(), replayed.state());
}

#[test]
fn test_replay_mid_game_keeps_pending_mismatch() {
    let config = MatchConfig::default();
    let mut engine = GameEngine::new(config.clone(), 5).unwrap();
    let deck = engine.state().initial_deck();

    // Find two cards that differ so the last action leaves a mismatch showing
    let other = (1..deck.len()).find(|&i| deck[i] != deck[0]).unwrap();
    engine.flip(0).unwrap();
    engine.flip(other).unwrap();

    let replayed = GameEngine::replay(config, &deck, history_actions(&engine)).unwrap();

    assert_eq!(replayed.state().selection(), &[0, other]);
    assert_eq!(
        replayed.pending_resolution().map(|t| t.indices),
        Some([0, other])
    );
}

#[test]
fn test_replay_rejects_bad_index() {
    let config = MatchConfig::new().with_symbols(['A']);
    let deck = vec![Symbol::new('A'), Symbol::new('A')];

    let err = GameEngine::replay(config, &deck, [Action::Flip(0), Action::Flip(9)]).unwrap_err();

    assert_eq!(err, EngineError::InvalidIndex { index: 9, len: 2 });
}
