//! Piece module - tetromino shapes and rotation
//!
//! A shape is a small boolean matrix with an explicit row/col extent; the
//! extent swaps when a non-square shape rotates. Rotation is a pure
//! transpose-and-reverse transform with no grid coupling and no wall kicks:
//! the engine tries the rotated shape and reverts on collision.

use crate::core::SimpleRng;
use crate::types::{NeonColor, SPAWN_X, SPAWN_Y};

/// Maximum extent of a shape matrix in either dimension
pub const SHAPE_MAX: usize = 4;

/// Tetromino cell pattern with explicit extent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [[bool; SHAPE_MAX]; SHAPE_MAX],
}

impl Shape {
    /// Build a shape from a row-major pattern. Rows beyond the pattern are
    /// left empty; extent is taken from the pattern dimensions.
    pub const fn from_pattern<const R: usize, const C: usize>(pattern: [[u8; C]; R]) -> Self {
        let mut cells = [[false; SHAPE_MAX]; SHAPE_MAX];
        let mut r = 0;
        while r < R {
            let mut c = 0;
            while c < C {
                cells[r][c] = pattern[r][c] != 0;
                c += 1;
            }
            r += 1;
        }
        Self {
            rows: R as u8,
            cols: C as u8,
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    /// Whether the cell at (row, col) is filled. Out-of-extent reads are false.
    pub fn filled(&self, row: usize, col: usize) -> bool {
        row < self.rows() && col < self.cols() && self.cells[row][col]
    }

    /// Iterate over filled cells as (row, col) offsets
    pub fn iter_filled(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.rows())
            .flat_map(move |r| (0..self.cols()).map(move |c| (r, c)))
            .filter(move |&(r, c)| self.cells[r][c])
    }
}

/// Rotate a shape 90 degrees clockwise: transpose, then reverse each row.
/// The extent swaps for non-square shapes; the anchor is untouched.
pub fn rotate_cw(shape: &Shape) -> Shape {
    let rows = shape.rows();
    let cols = shape.cols();

    let mut cells = [[false; SHAPE_MAX]; SHAPE_MAX];
    for (r, row) in cells.iter_mut().enumerate().take(cols) {
        for (c, cell) in row.iter_mut().enumerate().take(rows) {
            *cell = shape.cells[rows - 1 - c][r];
        }
    }

    Shape {
        rows: shape.cols,
        cols: shape.rows,
        cells,
    }
}

/// The 7 canonical tetromino patterns (I, O, Z, S, T, L, J)
pub const SHAPES: [Shape; 7] = [
    Shape::from_pattern([[1, 1, 1, 1]]),
    Shape::from_pattern([[1, 1], [1, 1]]),
    Shape::from_pattern([[1, 1, 0], [0, 1, 1]]),
    Shape::from_pattern([[0, 1, 1], [1, 1, 0]]),
    Shape::from_pattern([[1, 1, 1], [0, 1, 0]]),
    Shape::from_pattern([[1, 1, 1], [1, 0, 0]]),
    Shape::from_pattern([[1, 1, 1], [0, 0, 1]]),
];

/// Indices into [`SHAPES`], for tests and scenario setup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tetromino {
    I,
    O,
    Z,
    S,
    T,
    L,
    J,
}

impl Tetromino {
    pub const ALL: [Self; 7] = [
        Self::I,
        Self::O,
        Self::Z,
        Self::S,
        Self::T,
        Self::L,
        Self::J,
    ];

    pub fn shape(&self) -> Shape {
        SHAPES[*self as usize]
    }
}

/// Active falling piece: shape + color + top-left anchor in grid coordinates.
/// `y` may be conceptually negative during spawn; the collision logic treats
/// rows above the grid as open air.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Piece {
    pub shape: Shape,
    pub color: NeonColor,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    pub fn new(shape: Shape, color: NeonColor, x: i8, y: i8) -> Self {
        Self { shape, color, x, y }
    }

    /// Spawn a new piece at the fixed spawn position. Shape and color are
    /// chosen uniformly and independently.
    pub fn spawn(rng: &mut SimpleRng) -> Self {
        let shape = *rng.pick(&SHAPES);
        let color = *rng.pick(&NeonColor::ALL);
        Self::new(shape, color, SPAWN_X, SPAWN_Y)
    }

    /// Iterate over filled cells as absolute (x, y) grid coordinates
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .iter_filled()
            .map(move |(r, c)| (self.x + c as i8, self.y + r as i8))
    }
}
