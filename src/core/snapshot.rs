//! Read-only state snapshots for render layers.

use arrayvec::ArrayVec;

use crate::core::{Engine, Piece};
use crate::types::{Cell, GamePhase, NeonColor, COLS, ROWS, SCORE_DIGITS};

/// Active piece as absolute filled cells plus its identity.
#[derive(Debug, Clone, PartialEq)]
pub struct PieceSnapshot {
    pub cells: ArrayVec<(i8, i8), 4>,
    pub color: NeonColor,
    pub x: i8,
    pub y: i8,
}

impl From<&Piece> for PieceSnapshot {
    fn from(piece: &Piece) -> Self {
        Self {
            cells: piece.cells().collect(),
            color: piece.color,
            x: piece.x,
            y: piece.y,
        }
    }
}

/// Full game state snapshot. The piece is present only while the game is
/// running; render layers draw nothing for it otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub grid: [[Cell; COLS as usize]; ROWS as usize],
    pub piece: Option<PieceSnapshot>,
    pub score: u32,
    pub phase: GamePhase,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.grid = [[None; COLS as usize]; ROWS as usize];
        self.piece = None;
        self.score = 0;
        self.phase = GamePhase::Idle;
    }

    /// Score as the fixed-width zero-padded display string.
    pub fn score_string(&self) -> String {
        format_score(self.score)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[None; COLS as usize]; ROWS as usize],
            piece: None,
            score: 0,
            phase: GamePhase::Idle,
        }
    }
}

/// Zero-pad a score for display ("000000", "001600", ...).
pub fn format_score(score: u32) -> String {
    let width = SCORE_DIGITS;
    format!("{score:0>width$}")
}

impl Engine {
    /// Write the current state into an existing snapshot buffer.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.grid().write_rows(&mut out.grid);
        out.piece = if self.is_running() {
            Some(PieceSnapshot::from(self.piece()))
        } else {
            None
        };
        out.score = self.score();
        out.phase = self.phase();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_score_pads_to_six_digits() {
        assert_eq!(format_score(0), "000000");
        assert_eq!(format_score(1600), "001600");
        assert_eq!(format_score(1_234_567), "1234567");
    }

    #[test]
    fn test_snapshot_omits_piece_when_not_running() {
        let engine = Engine::new(5);
        let snap = engine.snapshot();
        assert_eq!(snap.phase, GamePhase::Idle);
        assert!(snap.piece.is_none());
    }

    #[test]
    fn test_snapshot_reflects_running_state() {
        let mut engine = Engine::new(5);
        engine.restart();
        let snap = engine.snapshot();

        assert_eq!(snap.phase, GamePhase::Running);
        let piece = snap.piece.as_ref().expect("running game has an active piece");
        assert_eq!(piece.cells.len(), 4);
        assert_eq!(snap.score_string(), "000000");
    }
}
