//! Shape catalog and piece geometry

use std::collections::HashSet;

use tui_blockfall::core::shapes::cell_offset;
use tui_blockfall::core::{rotation_count, rotations, Grid, Piece};
use tui_blockfall::types::{PieceKind, SPAWN_X, SPAWN_Y};

#[test]
fn every_state_has_four_distinct_cells_in_the_box() {
    for kind in PieceKind::ALL {
        for state in rotations(kind) {
            let unique: HashSet<u8> = state.iter().copied().collect();
            assert_eq!(unique.len(), 4, "{kind:?} state {state:?}");
            assert!(state.iter().all(|&i| i < 16), "{kind:?} state {state:?}");
        }
    }
}

#[test]
fn rotation_counts_per_kind() {
    let expected = [
        (PieceKind::I, 2),
        (PieceKind::Z, 2),
        (PieceKind::S, 2),
        (PieceKind::L, 4),
        (PieceKind::J, 4),
        (PieceKind::T, 4),
        (PieceKind::O, 1),
    ];
    for (kind, count) in expected {
        assert_eq!(rotation_count(kind), count, "{kind:?}");
    }
}

#[test]
fn exact_rotation_tables() {
    assert_eq!(rotations(PieceKind::I), &[[1, 5, 9, 13], [4, 5, 6, 7]]);
    assert_eq!(rotations(PieceKind::O), &[[1, 2, 5, 6]]);
    assert_eq!(
        rotations(PieceKind::T),
        &[[1, 4, 5, 6], [1, 4, 5, 9], [4, 5, 6, 9], [1, 5, 6, 9]]
    );
}

#[test]
fn box_index_splits_row_major() {
    assert_eq!(cell_offset(0), (0, 0));
    assert_eq!(cell_offset(6), (1, 2));
    assert_eq!(cell_offset(13), (3, 1));
}

#[test]
fn rotating_through_every_state_returns_to_start() {
    for kind in PieceKind::ALL {
        let start = Piece::spawn(kind, 2);
        let mut piece = start;
        for _ in 0..rotation_count(kind) {
            piece.rotate();
        }
        assert_eq!(piece, start, "{kind:?}");
    }
}

#[test]
fn spawned_piece_sits_at_spawn_origin() {
    let piece = Piece::spawn(PieceKind::S, 4);
    assert_eq!((piece.x, piece.y), (SPAWN_X, SPAWN_Y));
    assert_eq!(piece.rotation, 0);
    // S state 0 is 6, 7, 9, 10.
    let blocks: Vec<_> = piece.blocks().into_iter().collect();
    assert_eq!(blocks, vec![(1, 7), (1, 8), (2, 6), (2, 7)]);
}

#[test]
fn cells_above_the_top_do_not_collide() {
    let grid = Grid::new(6, 9);
    let mut piece = Piece::spawn(PieceKind::I, 1);
    piece.y = -3;
    assert!(!piece.collides(&grid));

    piece.y = 3;
    assert!(piece.collides(&grid));
}
