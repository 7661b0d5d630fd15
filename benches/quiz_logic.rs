use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_quiz::core::{generate, QuizEngine, SimpleRng};
use tui_quiz::types::{Difficulty, ROUND_SECONDS};

fn bench_generate(c: &mut Criterion) {
    for level in Difficulty::ALL {
        let mut rng = SimpleRng::new(12345);
        c.bench_function(&format!("generate_{}", level.as_str()), |b| {
            b.iter(|| black_box(generate(level.profile(), &mut rng)))
        });
    }
}

fn bench_submit(c: &mut Criterion) {
    let mut engine = QuizEngine::new(12345);
    engine.start();

    c.bench_function("submit_answer", |b| {
        b.iter(|| {
            let outcome = engine.submit_answer(black_box("42"));
            engine.drain_events().for_each(drop);
            black_box(outcome)
        })
    });
}

fn bench_full_round(c: &mut Criterion) {
    c.bench_function("full_round_ticks", |b| {
        b.iter(|| {
            let mut engine = QuizEngine::new(12345);
            engine.start();
            for _ in 0..ROUND_SECONDS {
                engine.advance_time(black_box(1_000));
            }
            engine.drain_events().count()
        })
    });
}

criterion_group!(benches, bench_generate, bench_submit, bench_full_round);
criterion_main!(benches);
