//! Core module - pure game simulation with no I/O dependencies
//!
//! Contains the grid, piece shapes and rotation, seeded RNG, the engine
//! state machine, and read-only snapshots for render layers.

pub mod engine;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod snapshot;

pub use engine::Engine;
pub use grid::Grid;
pub use piece::{rotate_cw, Piece, Shape, Tetromino, SHAPES};
pub use rng::SimpleRng;
pub use snapshot::{format_score, GameSnapshot, PieceSnapshot};
