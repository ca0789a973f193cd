//! GameView: lays a snapshot out as styled text lines.
//!
//! Each grid cell is two characters wide so blocks look square in a
//! terminal. The view produces plain data (glyph + color runs); the
//! renderer owns all terminal I/O.

use crate::core::GameSnapshot;
use crate::types::{GamePhase, NeonColor, StatusSignal, COLS, ROWS};

/// One run of styled text.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledSpan {
    pub text: String,
    pub color: Option<NeonColor>,
}

/// A rendered line is a sequence of spans.
pub type Line = Vec<StyledSpan>;

const EMPTY_CELL: &str = " .";
const FILLED_CELL: &str = "[]";

#[derive(Debug, Clone, Default)]
pub struct GameView;

impl GameView {
    /// Render the snapshot into lines: bordered playfield, score, phase,
    /// and the last status signal.
    pub fn render(&self, snap: &GameSnapshot, status: Option<StatusSignal>) -> Vec<Line> {
        let mut lines = Vec::with_capacity(ROWS as usize + 4);

        lines.push(plain(format!("+{}+", "-".repeat(COLS as usize * 2))));

        for y in 0..ROWS as usize {
            let mut line: Line = Vec::with_capacity(COLS as usize + 2);
            line.push(StyledSpan {
                text: "|".to_string(),
                color: None,
            });
            for x in 0..COLS as usize {
                let cell = self.cell_at(snap, x as i8, y as i8);
                match cell {
                    Some(color) => line.push(StyledSpan {
                        text: FILLED_CELL.to_string(),
                        color: Some(color),
                    }),
                    None => line.push(StyledSpan {
                        text: EMPTY_CELL.to_string(),
                        color: None,
                    }),
                }
            }
            line.push(StyledSpan {
                text: "|".to_string(),
                color: None,
            });
            lines.push(line);
        }

        lines.push(plain(format!("+{}+", "-".repeat(COLS as usize * 2))));
        lines.push(plain(format!("SCORE {}", snap.score_string())));
        lines.push(plain(self.footer_text(snap.phase, status)));

        lines
    }

    /// Locked cell color, or the active piece's color when it covers (x, y).
    fn cell_at(&self, snap: &GameSnapshot, x: i8, y: i8) -> Option<NeonColor> {
        if let Some(piece) = &snap.piece {
            if piece.cells.iter().any(|&(px, py)| px == x && py == y) {
                return Some(piece.color);
            }
        }
        snap.grid[y as usize][x as usize]
    }

    fn footer_text(&self, phase: GamePhase, status: Option<StatusSignal>) -> String {
        let status_text = match (phase, status) {
            (GamePhase::GameOver, _) => StatusSignal::Terminated.as_str(),
            (_, Some(status)) => status.as_str(),
            (GamePhase::Idle, None) => "PRESS S TO SCAN / ENTER TO START",
            (GamePhase::Scanning, None) => StatusSignal::ShowHand.as_str(),
            (GamePhase::Running, None) => StatusSignal::SystemActive.as_str(),
        };
        status_text.to_string()
    }
}

fn plain(text: String) -> Line {
    vec![StyledSpan { text, color: None }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Engine;

    #[test]
    fn test_render_has_playfield_and_footer() {
        let mut engine = Engine::new(3);
        engine.restart();

        let view = GameView;
        let lines = view.render(&engine.snapshot(), None);

        // border + 20 rows + border + score + status
        assert_eq!(lines.len(), ROWS as usize + 4);

        let score_line: String = lines[ROWS as usize + 2]
            .iter()
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(score_line, "SCORE 000000");
    }

    #[test]
    fn test_active_piece_is_drawn() {
        let mut engine = Engine::new(3);
        engine.restart();

        let view = GameView;
        let lines = view.render(&engine.snapshot(), None);

        let colored_spans: usize = lines
            .iter()
            .flatten()
            .filter(|span| span.color.is_some())
            .count();
        assert_eq!(colored_spans, 4, "the four piece cells should be colored");
    }

    #[test]
    fn test_game_over_footer_wins() {
        let engine = Engine::new(3);
        let view = GameView;
        let mut snap = engine.snapshot();
        snap.phase = GamePhase::GameOver;

        let lines = view.render(&snap, Some(StatusSignal::MovingLeft));
        let footer: String = lines
            .last()
            .unwrap()
            .iter()
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(footer, "TERMINATED");
    }
}
