//! Engine behavior through the public API on prepared grids

use tui_blockfall::core::{GameState, Grid, ScriptedSource};
use tui_blockfall::types::{Cell, GameAction, GameStatus, PieceKind, EMPTY};

const ROWS: usize = 10;
const COLS: usize = 9;

/// A vertical I at spawn occupies column 6.
const I_COL: usize = 6;

fn empty_rows() -> Vec<Vec<Cell>> {
    vec![vec![EMPTY; COLS]; ROWS]
}

fn full_except(color: Cell, holes: &[usize]) -> Vec<Cell> {
    (0..COLS)
        .map(|c| if holes.contains(&c) { EMPTY } else { color })
        .collect()
}

fn game(rows: Vec<Vec<Cell>>) -> GameState<ScriptedSource> {
    let source = ScriptedSource::new(vec![PieceKind::I, PieceKind::O], vec![1]);
    GameState::from_grid(Grid::from_rows(rows), source)
}

#[test]
fn test_single_row_clear_shifts_rows_above() {
    let mut rows = empty_rows();
    rows[9] = full_except(2, &[I_COL, 8]);
    rows[8] = full_except(3, &[I_COL]);
    rows[7][0] = 4;
    let before = rows.clone();

    let mut state = game(rows);
    assert!(state.hard_drop());

    // The I filled rows 6..=9 of column 6; row 8 was the only full row.
    let grid = state.grid();
    assert_eq!(state.score(), 100);
    assert_eq!(state.level(), 2);

    // Rows below the cleared one keep their contents (plus the I cell).
    let mut expected_9 = before[9].clone();
    expected_9[I_COL] = 1;
    assert_eq!(grid.row(9), expected_9.as_slice());

    // Old row 7 (marker at col 0, I cell at col 6) moved down to row 8.
    let mut expected_8 = vec![EMPTY; COLS];
    expected_8[0] = 4;
    expected_8[I_COL] = 1;
    assert_eq!(grid.row(8), expected_8.as_slice());

    // Old row 6 held only the top of the I.
    let mut expected_7 = vec![EMPTY; COLS];
    expected_7[I_COL] = 1;
    assert_eq!(grid.row(7), expected_7.as_slice());

    for r in 0..7 {
        assert!(grid.row(r).iter().all(|&c| c == EMPTY), "row {r} not empty");
    }
    assert!(!state.ended());
}

#[test]
fn test_two_full_rows_clear_in_one_lock() {
    let mut rows = empty_rows();
    rows[9] = full_except(2, &[I_COL]);
    rows[8] = full_except(3, &[I_COL]);

    let mut state = game(rows);
    state.hard_drop();

    let event = state.take_last_event().unwrap();
    assert_eq!(event.rows_cleared, 2);
    assert_eq!(event.score_gained, 200);
    assert!(!event.ended);
    assert_eq!(state.score(), 200);
    assert_eq!(state.level(), 3);

    // Only the two top cells of the I remain, now at the bottom.
    let grid = state.grid();
    assert_eq!(grid.cells().iter().filter(|&&c| c != EMPTY).count(), 2);
    assert_eq!(grid.get(9, I_COL as i32), Some(1));
    assert_eq!(grid.get(8, I_COL as i32), Some(1));
}

#[test]
fn test_spawn_collision_ends_game() {
    let mut rows = empty_rows();
    for row in rows.iter_mut().take(4) {
        for cell in row.iter_mut().skip(5) {
            *cell = 1;
        }
    }

    let mut state = game(rows);
    assert!(state.ended());
    assert_eq!(state.status(), GameStatus::Ended);

    let before = state.snapshot();
    for action in [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::MoveDown,
        GameAction::Rotate,
        GameAction::HardDrop,
    ] {
        assert!(!state.apply_action(action));
    }
    assert_eq!(state.snapshot(), before);
}

#[test]
fn test_restart_after_game_over() {
    let mut rows = empty_rows();
    for row in rows.iter_mut().take(4) {
        row[I_COL] = 3;
    }
    let mut state = game(rows);
    assert!(state.ended());

    state.restart();

    assert!(!state.ended());
    assert_eq!(state.score(), 0);
    assert_eq!(state.level(), 1);
    assert_eq!((state.rows(), state.cols()), (ROWS, COLS));
    assert!(state.grid().is_empty());
    // Two fresh pieces on top of the two drawn at construction.
    assert_eq!(state.source().kinds_drawn(), 4);
}

#[test]
fn test_move_down_locks_at_floor() {
    let mut state = game(empty_rows());
    // Vertical I from row 0 needs six steps to reach rows 6..=9.
    for _ in 0..6 {
        assert!(state.move_down());
    }
    assert_eq!(state.active().y, 6);

    assert!(!state.move_down());
    assert_eq!(state.active().kind, PieceKind::O);
    assert_eq!(state.next().kind, PieceKind::I);
    for row in 6..ROWS as i32 {
        assert_eq!(state.grid().get(row, I_COL as i32), Some(1));
    }
}

#[test]
fn test_side_walls_reject_moves() {
    let mut state = game(empty_rows());
    // I occupies column x + 1; the left wall stops it at x = -1.
    while state.move_left() {}
    assert_eq!(state.active().x, -1);
    assert!(!state.move_left());
    assert_eq!(state.active().x, -1);

    while state.move_right() {}
    assert_eq!(state.active().x, COLS as i32 - 2);
}

#[test]
fn test_full_top_row_survives_lock() {
    let mut rows = empty_rows();
    rows[0] = vec![3; COLS];

    // S rotation 0 occupies box rows 1 and 2, so it spawns clear of row 0.
    let source = ScriptedSource::repeat(PieceKind::S);
    let mut state = GameState::from_grid(Grid::from_rows(rows), source);
    assert!(!state.ended());

    assert!(state.hard_drop());

    let event = state.take_last_event().unwrap();
    assert_eq!(event.rows_cleared, 0);
    assert!(!event.ended);
    assert_eq!(state.score(), 0);
    assert_eq!(state.level(), 1);
    assert_eq!(state.grid().row(0), vec![3; COLS].as_slice());
    assert_eq!(state.grid().get(9, 6), Some(1));
    assert_eq!(state.grid().get(8, 8), Some(1));
}
