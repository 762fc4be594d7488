//! Stage tests - grid, collision, sweeping, and garbage injection

use gridfall::core::{Piece, Stage};
use gridfall::types::{Cell, PieceKind, STAGE_HEIGHT, STAGE_WIDTH};

fn locked(kind: PieceKind) -> Cell {
    Cell::Occupied { kind, locked: true }
}

fn unlocked(kind: PieceKind) -> Cell {
    Cell::Occupied {
        kind,
        locked: false,
    }
}

#[test]
fn test_stage_new_empty() {
    let stage = Stage::new();
    assert_eq!(
        stage.cells().len(),
        STAGE_WIDTH as usize * STAGE_HEIGHT as usize
    );
    for y in 0..STAGE_HEIGHT as i8 {
        for x in 0..STAGE_WIDTH as i8 {
            assert_eq!(stage.get(x, y), Some(Cell::Empty));
        }
    }
}

#[test]
fn test_stage_get_out_of_bounds() {
    let stage = Stage::new();
    assert_eq!(stage.get(-1, 0), None);
    assert_eq!(stage.get(0, -1), None);
    assert_eq!(stage.get(STAGE_WIDTH as i8, 0), None);
    assert_eq!(stage.get(0, STAGE_HEIGHT as i8), None);
}

#[test]
fn test_stage_set_and_get() {
    let mut stage = Stage::new();
    assert!(stage.set(5, 10, locked(PieceKind::T)));
    assert_eq!(stage.get(5, 10), Some(locked(PieceKind::T)));

    assert!(stage.set(5, 10, Cell::Empty));
    assert_eq!(stage.get(5, 10), Some(Cell::Empty));

    assert!(!stage.set(-1, 0, locked(PieceKind::T)));
    assert!(!stage.set(0, STAGE_HEIGHT as i8, locked(PieceKind::T)));
}

#[test]
fn test_collides_with_walls_and_floor() {
    let stage = Stage::new();
    let mut piece = Piece::spawn(PieceKind::O);

    assert!(!stage.collides(&piece, 0, 0));

    // Left wall: the 2x2 shape fits at x = 0 but not at x = -1.
    piece.x = 0;
    assert!(!stage.collides(&piece, 0, 0));
    assert!(stage.collides(&piece, -1, 0));

    // Right wall.
    piece.x = STAGE_WIDTH as i8 - 2;
    assert!(!stage.collides(&piece, 0, 0));
    assert!(stage.collides(&piece, 1, 0));

    // Floor.
    piece.x = 4;
    piece.y = STAGE_HEIGHT as i8 - 2;
    assert!(!stage.collides(&piece, 0, 0));
    assert!(stage.collides(&piece, 0, 1));
}

#[test]
fn test_collides_only_against_locked_cells() {
    let mut stage = Stage::new();
    let piece = Piece::spawn(PieceKind::O);

    // The transient paint of a previous frame never blocks.
    stage.set(4, 3, unlocked(PieceKind::T));
    assert!(!stage.collides(&piece, 0, 1));

    stage.set(4, 3, locked(PieceKind::T));
    assert!(stage.collides(&piece, 0, 0));
}

#[test]
fn test_drop_distance() {
    let mut stage = Stage::new();
    let piece = Piece::spawn(PieceKind::O);

    // Empty board: from y = 2, the 2-tall piece lands at y = 22.
    assert_eq!(stage.drop_distance(&piece), 20);

    // A locked cell in the piece's column shortens the drop.
    stage.set(4, 12, locked(PieceKind::Garbage));
    assert_eq!(stage.drop_distance(&piece), 8);
}

#[test]
fn test_redraw_paints_transient_then_locks() {
    let mut stage = Stage::new();
    let mut piece = Piece::spawn(PieceKind::O);

    assert!(stage.redraw(&piece).is_none());
    assert_eq!(stage.get(4, 2), Some(unlocked(PieceKind::O)));

    // Moving on repaints; the old cells are wiped.
    piece.x += 1;
    assert!(stage.redraw(&piece).is_none());
    assert_eq!(stage.get(4, 2), Some(Cell::Empty));
    assert_eq!(stage.get(5, 2), Some(unlocked(PieceKind::O)));

    piece.collided = true;
    let outcome = stage.redraw(&piece).unwrap();
    assert_eq!(outcome.cleared, 0);
    assert!(!outcome.lock_out);
    assert_eq!(stage.get(5, 2), Some(locked(PieceKind::O)));
}

#[test]
fn test_sweep_shifts_survivors_down() {
    let mut stage = Stage::new();
    for x in 0..STAGE_WIDTH as i8 {
        stage.set(x, 23, locked(PieceKind::Garbage));
    }
    stage.set(3, 22, locked(PieceKind::T));

    assert_eq!(stage.sweep_full_rows(), 1);

    // The survivor dropped one row; the vacated row is empty.
    assert_eq!(stage.get(3, 23), Some(locked(PieceKind::T)));
    assert_eq!(stage.get(3, 22), Some(Cell::Empty));

    // Nothing left to sweep.
    assert_eq!(stage.sweep_full_rows(), 0);
}

#[test]
fn test_sweep_multiple_rows_preserves_survivor_order() {
    let mut stage = Stage::new();
    for x in 0..STAGE_WIDTH as i8 {
        stage.set(x, 23, locked(PieceKind::Garbage));
        stage.set(x, 21, locked(PieceKind::Garbage));
    }
    stage.set(0, 22, locked(PieceKind::S));
    stage.set(0, 20, locked(PieceKind::Z));

    assert_eq!(stage.sweep_full_rows(), 2);

    assert_eq!(stage.get(0, 23), Some(locked(PieceKind::S)));
    assert_eq!(stage.get(0, 22), Some(locked(PieceKind::Z)));
    for x in 1..STAGE_WIDTH as i8 {
        assert_eq!(stage.get(x, 23), Some(Cell::Empty));
    }
}

#[test]
fn test_garbage_row_shifts_stack_up() {
    let mut stage = Stage::new();
    stage.set(2, 23, locked(PieceKind::T));

    stage.push_garbage_row(7);

    // Old bottom row moved up one; the new bottom row is garbage with a
    // single hole.
    assert_eq!(stage.get(2, 22), Some(locked(PieceKind::T)));
    for x in 0..STAGE_WIDTH as i8 {
        let expected = if x == 7 {
            Cell::Empty
        } else {
            locked(PieceKind::Garbage)
        };
        assert_eq!(stage.get(x, 23), Some(expected));
    }

    // The injected row can never be swept as-is.
    assert!(!stage.is_row_full(23));
}

#[test]
fn test_top_buffer_blocked_ignores_transient_cells() {
    let mut stage = Stage::new();
    assert!(!stage.top_buffer_blocked());

    stage.set(6, 0, unlocked(PieceKind::I));
    assert!(!stage.top_buffer_blocked());

    stage.set(6, 0, locked(PieceKind::I));
    assert!(stage.top_buffer_blocked());
}
