//! Board integration tests: grid access and line compaction.

use gridfall::core::Board;
use gridfall::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn new_board_is_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i16 {
        for x in 0..BOARD_WIDTH as i16 {
            assert!(board.is_free(x, y), "cell ({x}, {y}) should be free");
            assert_eq!(board.get(x, y), Some(None));
        }
    }
}

#[test]
fn out_of_bounds_access() {
    let mut board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i16, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i16), None);

    assert!(!board.set(-1, 0, Some(PieceKind::T)));
    assert!(!board.set(BOARD_WIDTH as i16, 0, Some(PieceKind::T)));

    assert!(!board.is_free(-1, 0));
    assert!(!board.is_occupied(-1, 0));
}

#[test]
fn set_and_get_roundtrip() {
    let mut board = Board::new();

    assert!(board.set(5, 10, Some(PieceKind::T)));
    assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));
    assert!(board.is_occupied(5, 10));
    assert!(!board.is_free(5, 10));

    assert!(board.set(5, 10, None));
    assert_eq!(board.get(5, 10), Some(None));
}

#[test]
fn row_fullness() {
    let mut board = Board::new();
    assert!(!board.is_row_full(5));

    for x in 0..BOARD_WIDTH as i16 {
        board.set(x, 5, Some(PieceKind::T));
    }
    assert!(board.is_row_full(5));

    // One hole is enough to disqualify a row.
    board.set(9, 5, None);
    assert!(!board.is_row_full(5));

    // Out-of-range rows are never full.
    assert!(!board.is_row_full(BOARD_HEIGHT));
}

#[test]
fn clearing_shifts_rows_down_and_refills_top() {
    let mut board = Board::new();

    for x in 0..BOARD_WIDTH as i16 {
        board.set(x, 19, Some(PieceKind::O));
    }
    board.set(0, 17, Some(PieceKind::I));
    board.set(1, 18, Some(PieceKind::T));

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[19]);

    // Everything above slid down one row; a fresh empty row appeared on top.
    assert_eq!(board.get(0, 18), Some(Some(PieceKind::I)));
    assert_eq!(board.get(1, 19), Some(Some(PieceKind::T)));
    assert!((0..BOARD_WIDTH as i16).all(|x| board.get(x, 0) == Some(None)));
    assert_eq!(
        board.cells().len(),
        BOARD_WIDTH as usize * BOARD_HEIGHT as usize
    );
}

#[test]
fn clearing_multiple_rows_preserves_survivor_order() {
    let mut board = Board::new();

    for x in 0..BOARD_WIDTH as i16 {
        board.set(x, 5, Some(PieceKind::T));
        board.set(x, 10, Some(PieceKind::I));
        board.set(x, 15, Some(PieceKind::O));
    }
    board.set(0, 4, Some(PieceKind::J));
    board.set(0, 9, Some(PieceKind::L));
    board.set(0, 14, Some(PieceKind::S));

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[5, 10, 15]);

    // Each marker drops by the number of cleared rows below it.
    assert_eq!(board.get(0, 7), Some(Some(PieceKind::J)));
    assert_eq!(board.get(0, 11), Some(Some(PieceKind::L)));
    assert_eq!(board.get(0, 15), Some(Some(PieceKind::S)));
}

#[test]
fn clear_is_idempotent() {
    let mut board = Board::new();

    for x in 0..BOARD_WIDTH as i16 {
        board.set(x, 19, Some(PieceKind::O));
    }
    board.set(3, 18, Some(PieceKind::T));

    assert_eq!(board.clear_full_rows().len(), 1);
    let snapshot = board.clone();

    // Second pass with no new locks: nothing qualifies, nothing moves.
    assert!(board.clear_full_rows().is_empty());
    assert_eq!(board, snapshot);
    assert_eq!(
        board.cells().len(),
        BOARD_WIDTH as usize * BOARD_HEIGHT as usize
    );
}
