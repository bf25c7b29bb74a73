//! Performance benchmarks for rating calculations

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use elo_calculator::types::{Game, PerformanceInput, RatingUpdateInput, Score, TimeClass};
use elo_calculator::{calculate_performance, calculate_rating};

fn bench_rating_update(c: &mut Criterion) {
    let input = RatingUpdateInput::new(1850.0, 1920.0, Score::Draw)
        .with_time_class(TimeClass::Classical)
        .with_over_age_18(false);

    c.bench_function("rating_update_single_game", |b| {
        b.iter(|| black_box(calculate_rating(black_box(&input))))
    });
}

fn bench_performance(c: &mut Criterion) {
    let scores = [Score::Win, Score::Draw, Score::Loss];
    let input: PerformanceInput = (0..9)
        .map(|i| Game::new(1600.0 + (i as f64 * 35.0), scores[i % scores.len()]))
        .collect();

    c.bench_function("performance_9_round_tournament", |b| {
        b.iter(|| black_box(calculate_performance(black_box(&input))))
    });
}

criterion_group!(benches, bench_rating_update, bench_performance);
criterion_main!(benches);
