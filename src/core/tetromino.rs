//! Tetromino catalog - piece shapes in spawn orientation
//!
//! Shapes are square matrices (1x1 garbage up to 4x4 for I) stored in a
//! fixed 4x4 grid with a side length, so rotation is a pure in-place
//! transpose + flip with no allocation.

use arrayvec::ArrayVec;

use crate::types::PieceKind;

/// A piece's shape matrix. `cells[y][x]` is occupied iff true; only the
/// top-left `side x side` region is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    side: u8,
    cells: [[bool; 4]; 4],
}

impl Shape {
    /// Side length of the square matrix.
    pub fn side(&self) -> u8 {
        self.side
    }

    /// Whether the matrix cell at (x, y) is occupied.
    pub fn filled(&self, x: u8, y: u8) -> bool {
        x < self.side && y < self.side && self.cells[y as usize][x as usize]
    }

    /// Occupied offsets (dx, dy) relative to the piece anchor, row-major.
    /// Every catalog shape has at most 4 occupied cells.
    pub fn offsets(&self) -> ArrayVec<(i8, i8), 4> {
        let mut out = ArrayVec::new();
        let n = self.side as usize;
        for y in 0..n {
            for x in 0..n {
                if self.cells[y][x] {
                    out.push((x as i8, y as i8));
                }
            }
        }
        out
    }

    /// Rotate 90 degrees: transpose, then reverse each row for clockwise or
    /// reverse the row order for counter-clockwise.
    pub fn rotated(&self, clockwise: bool) -> Shape {
        let n = self.side as usize;
        let mut transposed = [[false; 4]; 4];
        for y in 0..n {
            for x in 0..n {
                transposed[y][x] = self.cells[x][y];
            }
        }

        let mut cells = [[false; 4]; 4];
        if clockwise {
            for y in 0..n {
                for x in 0..n {
                    cells[y][x] = transposed[y][n - 1 - x];
                }
            }
        } else {
            for y in 0..n {
                cells[y] = transposed[n - 1 - y];
            }
        }

        Shape {
            side: self.side,
            cells,
        }
    }
}

/// Spawn-orientation shape for a piece kind.
pub fn spawn_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => Shape {
            side: 4,
            cells: [
                [true, true, true, true],
                [false, false, false, false],
                [false, false, false, false],
                [false, false, false, false],
            ],
        },
        PieceKind::J => shape3([
            [true, false, false],
            [true, true, true],
            [false, false, false],
        ]),
        PieceKind::L => shape3([
            [false, false, true],
            [true, true, true],
            [false, false, false],
        ]),
        PieceKind::O => Shape {
            side: 2,
            cells: [
                [true, true, false, false],
                [true, true, false, false],
                [false, false, false, false],
                [false, false, false, false],
            ],
        },
        PieceKind::S => shape3([
            [false, true, true],
            [true, true, false],
            [false, false, false],
        ]),
        PieceKind::T => shape3([
            [false, true, false],
            [true, true, true],
            [false, false, false],
        ]),
        PieceKind::Z => shape3([
            [true, true, false],
            [false, true, true],
            [false, false, false],
        ]),
        PieceKind::Garbage => Shape {
            side: 1,
            cells: [
                [true, false, false, false],
                [false, false, false, false],
                [false, false, false, false],
                [false, false, false, false],
            ],
        },
    }
}

fn shape3(rows: [[bool; 3]; 3]) -> Shape {
    let mut cells = [[false; 4]; 4];
    for y in 0..3 {
        for x in 0..3 {
            cells[y][x] = rows[y][x];
        }
    }
    Shape { side: 3, cells }
}
