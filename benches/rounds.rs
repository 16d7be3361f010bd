//! Criterion benchmarks for round generation.
//!
//! Run with:
//!   cargo bench
//!
//! Results are saved to target/criterion/

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use mindarcade::prelude::*;

/// Numeric rounds at each difficulty tier.
fn bench_number_rounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("number_round");

    for score in [0u32, 10, 20].iter() {
        group.bench_with_input(BenchmarkId::new("score", score), score, |b, &score| {
            let mut rng = Prng::new(42);
            b.iter(|| black_box(NumberRound::generate(score, &mut rng)));
        });
    }

    group.finish();
}

/// Symbol rounds, including the distractor loop and shuffle.
fn bench_symbol_rounds(c: &mut Criterion) {
    let catalog = SymbolCatalog::default();
    let mut rng = Prng::new(7);
    c.bench_function("symbol_round", |b| {
        b.iter(|| black_box(SymbolRound::generate(&catalog, &mut rng)));
    });
}

/// A full headless number session: answer correctly, fire the delay, repeat.
fn bench_session_loop(c: &mut Criterion) {
    c.bench_function("number_session_50_rounds", |b| {
        b.iter(|| {
            let mut session = GameSession::new(ArcadeConfig::default(), Prng::new(1)).unwrap();
            let mut presenter = RecordingPresenter::new();
            session.select_mode(GameMode::Number, &mut presenter);
            for _ in 0..50 {
                let answer = session.number_round().map(|r| r.answer).unwrap_or(0);
                session.submit_answer(Answer::Number(answer), &mut presenter);
                for ticket in presenter.take_pending() {
                    session.fire(ticket, &mut presenter);
                }
                presenter.clear();
            }
            black_box(session.score())
        });
    });
}

criterion_group!(
    benches,
    bench_number_rounds,
    bench_symbol_rounds,
    bench_session_loop
);
criterion_main!(benches);
