use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_blockfall::core::{GameSnapshot, GameState, Grid, StdRandom};
use tui_blockfall::engine::Session;
use tui_blockfall::term::{FrameBuffer, GameView, Viewport};
use tui_blockfall::types::{GameAction, GRID_COLS, GRID_ROWS};

fn seeded_game() -> GameState {
    GameState::new(GRID_ROWS, GRID_COLS, StdRandom::seeded(12345))
}

fn bench_tick(c: &mut Criterion) {
    let mut session = Session::new(seeded_game());

    c.bench_function("session_tick", |b| {
        b.iter(|| {
            if session.ended() {
                session.apply_action(GameAction::Restart);
            }
            black_box(session.tick());
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut grid = Grid::new(GRID_ROWS, GRID_COLS);
            for row in GRID_ROWS - 4..GRID_ROWS {
                for col in 0..GRID_COLS {
                    grid.set(row as i32, col as i32, 1);
                }
            }
            while let Some(row) = grid.lowest_full_row() {
                grid.clear_row(row);
            }
            black_box(grid);
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut state = seeded_game();

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            if state.ended() {
                state.restart();
            }
            black_box(state.hard_drop());
        })
    });
}

fn bench_try_move(c: &mut Criterion) {
    let mut state = seeded_game();

    c.bench_function("move_left_right", |b| {
        b.iter(|| {
            black_box(state.move_left());
            black_box(state.move_right());
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = seeded_game();

    c.bench_function("rotate", |b| {
        b.iter(|| {
            black_box(state.rotate());
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let state = seeded_game();
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("snapshot_and_render", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
            view.render_into(&snap, Viewport::new(80, 24), &mut fb);
            black_box(&fb);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_hard_drop,
    bench_try_move,
    bench_rotate,
    bench_render
);
criterion_main!(benches);
