use criterion::{black_box, criterion_group, criterion_main, Criterion};

use memory_match::{GameEngine, MatchConfig};

/// Finish a game with perfect recall: each turn pairs the first hidden card with its twin.
fn play_perfect(engine: &mut GameEngine) {
    while !engine.state().completed {
        let state = engine.state();
        let Some(first) = (0..state.len()).find(|&i| state.cards[i].is_selectable()) else {
            break;
        };
        let Some(twin) = (first + 1..state.len()).find(|&i| state.cards[i].value == state.cards[first].value) else {
            break;
        };

        engine.flip(first).unwrap();
        engine.flip(twin).unwrap();
        engine.tick();
    }
}

fn bench_reset(c: &mut Criterion) {
    let mut engine = GameEngine::new(MatchConfig::default(), 42).unwrap();
    c.bench_function("reset_16_cards", |b| {
        b.iter(|| {
            black_box(engine.reset().len());
        })
    });
}

fn bench_full_game(c: &mut Criterion) {
    let mut engine = GameEngine::new(MatchConfig::default(), 42).unwrap();
    c.bench_function("perfect_game_16_cards", |b| {
        b.iter(|| {
            engine.reset();
            play_perfect(&mut engine);
            black_box(engine.state().score)
        })
    });
}

criterion_group!(benches, bench_reset, bench_full_game);
criterion_main!(benches);
