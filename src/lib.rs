//! HandBlock: a gesture-controlled falling-block puzzle engine.
//!
//! The [`core`] module is the simulation (grid, pieces, scoring, lifecycle),
//! [`gesture`] turns hand-landmark frames into engine commands, [`adapter`]
//! bridges an external detector process over TCP, and [`term`] renders a
//! debug view for the keyboard-fallback binary.

pub mod adapter;
pub mod core;
pub mod gesture;
pub mod term;
pub mod types;
