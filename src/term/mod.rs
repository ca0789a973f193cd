//! Terminal module - debug harness rendering
//!
//! A deliberately small view layer for the keyboard-fallback binary. The
//! engine knows nothing about it; it reads snapshots only.

pub mod renderer;
pub mod view;

pub use renderer::TerminalRenderer;
pub use view::{GameView, Line, StyledSpan};
