use criterion::{black_box, criterion_group, criterion_main, Criterion};
use well_tetris::core::{GameSnapshot, GameState, Grid};
use well_tetris::term::{FrameBuffer, GameView, Viewport};
use well_tetris::types::{GameAction, Spin};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            state.tick(black_box(16));
        })
    });
}

fn bench_sweep(c: &mut Criterion) {
    c.bench_function("sweep_4_rows", |b| {
        b.iter(|| {
            let mut grid = Grid::new(12, 20);
            for y in 16..20 {
                for x in 0..12 {
                    grid.set(x, y, 1);
                }
            }
            black_box(grid.sweep());
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            // Restart keeps the well from filling up across iterations.
            if state.grid().cells()[12 * 4..].iter().any(|&c| c != 0) {
                state.apply_action(GameAction::Restart);
            }
            black_box(state.hard_drop());
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    let mut dx = 1;

    c.bench_function("move_player", |b| {
        b.iter(|| {
            if !state.move_player(black_box(dx)) {
                dx = -dx;
            }
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("rotate_player", |b| {
        b.iter(|| {
            state.rotate_player(black_box(Spin::Clockwise));
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let state = GameState::new(12345);
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("snapshot_and_render", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
            view.render_into(&snap, Viewport::new(80, 24), &mut fb);
            black_box(fb.get(0, 0));
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_sweep,
    bench_hard_drop,
    bench_move,
    bench_rotate,
    bench_render
);
criterion_main!(benches);
