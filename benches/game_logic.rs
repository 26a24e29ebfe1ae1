use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_concentration::core::{Board, DeckRng, GameSnapshot, GameState};
use tui_concentration::term::{GameView, Viewport};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::seeded(12345);

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            black_box(state.on_tick());
        })
    });
}

fn bench_click_pair(c: &mut Criterion) {
    c.bench_function("click_pair_and_flip_back", |b| {
        b.iter_batched(
            || GameState::seeded(12345),
            |mut state| {
                state.on_cell_clicked(black_box(0), black_box(0));
                state.on_cell_clicked(black_box(0), black_box(1));
                for _ in 0..state.flip_back_delay() {
                    state.on_tick();
                }
                state
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_reset(c: &mut Criterion) {
    let mut state = GameState::seeded(12345);

    c.bench_function("reset", |b| {
        b.iter(|| {
            state.on_reset();
        })
    });
}

fn bench_deal(c: &mut Criterion) {
    let mut rng = DeckRng::new(7);

    c.bench_function("deal_board", |b| b.iter(|| black_box(Board::deal(&mut rng))));
}

fn bench_snapshot_and_render(c: &mut Criterion) {
    let state = GameState::seeded(12345);
    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let mut snap = GameSnapshot::default();
    let mut fb = view.render(&snap, None, vp);

    c.bench_function("snapshot_and_render", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
            view.render_into(black_box(&snap), Some((1, 1)), vp, &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_click_pair,
    bench_reset,
    bench_deal,
    bench_snapshot_and_render
);
criterion_main!(benches);
