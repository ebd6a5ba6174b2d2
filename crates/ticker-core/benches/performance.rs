use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use rand::Rng;
use ticker_core::{CellMetrics, DIGITS, TickerEngine, column_actions};

fn random_digits(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| (b'0' + rng.gen_range(0..10)) as char)
        .collect()
}

fn settled_engine(text: &str) -> TickerEngine<CellMetrics> {
    let mut engine = TickerEngine::new(CellMetrics::new());
    engine.set_character_sets(&[DIGITS]).unwrap();
    engine.set_text(text).unwrap();
    engine.set_progress(1.0);
    engine.on_animation_end();
    engine
}

fn bench_edit_script(c: &mut Criterion) {
    let old: Vec<char> = random_digits(256).chars().collect();
    let new: Vec<char> = random_digits(256).chars().collect();

    c.bench_function("edit_script/256_chars", |b| {
        b.iter(|| {
            let actions = column_actions(black_box(&old), black_box(&new));
            black_box(actions);
        })
    });
}

fn bench_retarget(c: &mut Criterion) {
    let text_a = random_digits(64);
    let text_b = random_digits(64);

    c.bench_function("retarget/64_columns", |b| {
        b.iter_batched(
            || settled_engine(&text_a),
            |mut engine| {
                engine.set_text(black_box(&text_b)).unwrap();
                engine.set_progress(1.0);
                engine.on_animation_end();
                black_box(engine.current_width());
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_progress_sweep(c: &mut Criterion) {
    let mut engine = settled_engine(&random_digits(64));
    engine.set_text(&random_digits(64)).unwrap();

    c.bench_function("progress_sweep/64_columns_16_steps", |b| {
        b.iter(|| {
            for step in 1..=16 {
                engine.set_progress(step as f32 / 16.0);
            }
            black_box(engine.current_width());
        })
    });
}

fn bench_frame_snapshot(c: &mut Criterion) {
    let mut engine = settled_engine(&random_digits(64));
    engine.set_text(&random_digits(64)).unwrap();

    // Hold every column mid-scroll so the snapshot carries the full three-cell stacks.
    engine.set_progress(0.5);

    c.bench_function("frame_snapshot/64_columns", |b| {
        b.iter(|| {
            let frame = engine.frame();
            black_box(frame);
        })
    });
}

criterion_group!(
    benches,
    bench_edit_script,
    bench_retarget,
    bench_progress_sweep,
    bench_frame_snapshot
);
criterion_main!(benches);
