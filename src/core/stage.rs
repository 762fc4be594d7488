//! Stage module - the playfield grid, collision test, and row sweep
//!
//! The stage is a 12x24 grid stored as a flat array for cache locality.
//! Rows 0-3 are a hidden buffer; rows 4-23 are visible. Row 0 is the
//! garbage-overflow sentinel, row 4 the lock-out sentinel.
//!
//! `collides` is the single source of truth for movement legality: every
//! move, rotation, drop, hold swap and garbage nudge goes through it.

use crate::core::player::Piece;
use crate::types::{Cell, PieceKind, STAGE_HEIGHT, STAGE_WIDTH, VISIBLE_START_ROW};

/// Total number of cells on the stage.
const STAGE_SIZE: usize = (STAGE_WIDTH as usize) * (STAGE_HEIGHT as usize);

/// Outcome of a redraw that committed a lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockSweep {
    /// Number of full rows removed by the sweep.
    pub cleared: u32,
    /// The visible-area sentinel row still holds a locked cell after the
    /// sweep - the piece locked while overlapping the visible top.
    pub lock_out: bool,
}

/// The playfield, row-major `(y * WIDTH + x)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage {
    cells: [Cell; STAGE_SIZE],
}

impl Stage {
    /// Create a new empty stage.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; STAGE_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= STAGE_WIDTH as i8 || y < 0 || y >= STAGE_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (STAGE_WIDTH as usize) + (x as usize))
    }

    /// Cell at (x, y), or None when out of bounds.
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set the cell at (x, y). Returns false when out of bounds.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Collision test: true iff any occupied cell of the piece's shape,
    /// after applying (dx, dy), lands out of bounds or on a locked cell.
    /// Unlocked occupants (transient paint) never block.
    pub fn collides(&self, piece: &Piece, dx: i8, dy: i8) -> bool {
        piece.shape.offsets().iter().any(|&(ox, oy)| {
            let x = piece.x + ox + dx;
            let y = piece.y + oy + dy;
            match self.get(x, y) {
                None => true,
                Some(cell) => cell.is_locked(),
            }
        })
    }

    /// Downward offset at which the piece would land: one less than the
    /// first blocking offset. Zero when the piece is already grounded.
    pub fn drop_distance(&self, piece: &Piece) -> i8 {
        let mut distance: i8 = 0;
        while !self.collides(piece, 0, distance + 1) {
            distance += 1;
        }
        distance
    }

    /// Per-tick redraw: erase the previous frame's transient paint, paint
    /// the piece at its current position (locked iff `piece.collided`),
    /// and on a lock run the row sweep and sentinel test.
    ///
    /// Showing a falling piece and committing a lock share this one path;
    /// the only difference is the `collided` flag on the painted cells.
    pub fn redraw(&mut self, piece: &Piece) -> Option<LockSweep> {
        self.clear_transient();

        for &(ox, oy) in piece.shape.offsets().iter() {
            self.set(
                piece.x + ox,
                piece.y + oy,
                Cell::Occupied {
                    kind: piece.kind,
                    locked: piece.collided,
                },
            );
        }

        if !piece.collided {
            return None;
        }

        let cleared = self.sweep_full_rows();
        let lock_out = self.row_has_locked(VISIBLE_START_ROW as usize);
        Some(LockSweep { cleared, lock_out })
    }

    /// Erase the previous frame's transient paint, leaving only locked
    /// cells. Part of every redraw; also used on its own when the active
    /// piece dies without a final repaint.
    pub fn clear_transient(&mut self) {
        for cell in &mut self.cells {
            if !cell.is_locked() {
                *cell = Cell::Empty;
            }
        }
    }

    /// Whether every cell of a row holds a non-empty occupant.
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= STAGE_HEIGHT as usize {
            return false;
        }
        let start = y * STAGE_WIDTH as usize;
        let end = start + STAGE_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| !cell.is_empty())
    }

    /// Whether any cell of a row is locked.
    pub fn row_has_locked(&self, y: usize) -> bool {
        if y >= STAGE_HEIGHT as usize {
            return false;
        }
        let start = y * STAGE_WIDTH as usize;
        let end = start + STAGE_WIDTH as usize;
        self.cells[start..end].iter().any(Cell::is_locked)
    }

    /// Remove every full row, preserving the relative order of survivors,
    /// and unshift one empty row at the top of the grid (buffer included)
    /// per removed row. Returns the number of rows removed.
    pub fn sweep_full_rows(&mut self) -> u32 {
        let width = STAGE_WIDTH as usize;
        let mut cleared: u32 = 0;
        let mut write_y = STAGE_HEIGHT as usize;

        // Two-pointer compaction, bottom to top.
        for read_y in (0..STAGE_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src = read_y * width;
                    let dst = write_y * width;
                    self.cells.copy_within(src..src + width, dst);
                }
            }
        }

        for cell in &mut self.cells[..write_y * width] {
            *cell = Cell::Empty;
        }

        cleared
    }

    /// Whether the topmost buffer row holds a locked cell - the garbage
    /// overflow sentinel. Checked by the orchestrator before injection so
    /// a doomed grid is left untouched.
    pub fn top_buffer_blocked(&self) -> bool {
        self.row_has_locked(0)
    }

    /// Shift the whole grid up one row (dropping row 0) and append a
    /// bottom row of locked garbage with a single empty hole column.
    pub fn push_garbage_row(&mut self, hole: usize) {
        let width = STAGE_WIDTH as usize;
        self.cells.copy_within(width.., 0);

        let bottom = (STAGE_HEIGHT as usize - 1) * width;
        for (x, cell) in self.cells[bottom..].iter_mut().enumerate() {
            *cell = if x == hole {
                Cell::Empty
            } else {
                Cell::Occupied {
                    kind: PieceKind::Garbage,
                    locked: true,
                }
            };
        }
    }

    /// Flat view of the cells, row-major.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::new()
    }
}
