use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rust_favors::core::{Favors, GameConfig, GameRng, PlayerId, PlayerPair};
use rust_favors::rules::{deal, draw, view_for};
use rust_favors::search::{choose_maximin, enumerate_legal_moves, FavorProjection, RandomPlayer};
use rust_favors::game::play_game;

fn opening_view() -> rust_favors::core::GameState {
    let mut rng = GameRng::new(42);
    let dealt = deal(&mut rng, PlayerPair::with_value(Favors::NEUTRAL), PlayerId::FIRST, 1);
    let (drawn, _) = draw(&dealt, PlayerId::FIRST, &mut rng);
    view_for(&drawn, PlayerId::FIRST)
}

fn bench_search(c: &mut Criterion) {
    let view = opening_view();
    let eval = FavorProjection::default();

    c.bench_function("enumerate_opening", |b| b.iter(|| enumerate_legal_moves(black_box(&view))));
    c.bench_function("maximin_opening", |b| b.iter(|| choose_maximin(black_box(&view), &eval)));
}

fn bench_random_game(c: &mut Criterion) {
    let config = GameConfig::new().with_round_limit(50);
    c.bench_function("random_game", |b| {
        b.iter(|| play_game(RandomPlayer::new(1), RandomPlayer::new(2), black_box(config.clone())))
    });
}

criterion_group!(benches, bench_search, bench_random_game);
criterion_main!(benches);
