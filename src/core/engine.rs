//! Engine module - the game state machine
//!
//! Owns the grid, the active piece, the score and the lifecycle phase, and
//! ties them together: movement, tentative rotation, time-based gravity, the
//! lock sequence with its top-out short circuit, line clearing and scoring.
//!
//! Failure semantics: gameplay operations are silent no-ops when their
//! preconditions are not met (wrong phase, blocked move). A blocked downward
//! move is not an error but the lock trigger; GameOver is a state transition,
//! not a failure. Nothing on these paths panics.

use crate::core::{rotate_cw, Grid, Piece, Shape, SimpleRng};
use crate::types::{
    GameCommand, GamePhase, LockEvent, COLS, DROP_INTERVAL_MS, LINE_BONUS_BASE, ROWS,
};

/// Complete game state. Single owner of grid and piece; render layers read
/// snapshots and never mutate.
#[derive(Debug, Clone)]
pub struct Engine {
    grid: Grid,
    piece: Piece,
    score: u32,
    phase: GamePhase,
    drop_acc_ms: u32,
    rng: SimpleRng,
    /// Last lock outcome (consumed by observers).
    last_event: Option<LockEvent>,
}

impl Engine {
    /// Create a new engine in the Idle phase with the given RNG seed.
    /// A piece exists from construction so render layers always have one to
    /// show once the game starts.
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let piece = Piece::spawn(&mut rng);
        Self {
            grid: Grid::new(),
            piece,
            score: 0,
            phase: GamePhase::Idle,
            drop_acc_ms: 0,
            rng,
            last_event: None,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Mutable grid access for host layers and scenario setup.
    /// Gameplay itself only mutates the grid through the lock sequence.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Replace the active piece (host/scenario seam; gameplay replaces the
    /// piece only on lock).
    pub fn set_piece(&mut self, piece: Piece) {
        self.piece = piece;
    }

    /// Enter the gesture warm-up phase. Valid from Idle only.
    pub fn begin_scan(&mut self) {
        if self.phase == GamePhase::Idle {
            self.phase = GamePhase::Scanning;
        }
    }

    /// Start or restart the game from any phase: fresh grid, fresh piece,
    /// zero score. The RNG keeps running so restarts get new pieces.
    pub fn restart(&mut self) {
        self.grid.clear();
        self.piece = Piece::spawn(&mut self.rng);
        self.score = 0;
        self.drop_acc_ms = 0;
        self.last_event = None;
        self.phase = GamePhase::Running;
    }

    /// Check whether the piece's shape would collide at an offset position.
    ///
    /// A filled cell collides when its column leaves [0, COLS) or its row
    /// reaches ROWS, or when it lands on an occupied cell. Rows above the
    /// grid (y < 0) are open air so pieces can hang over the top edge.
    fn collides(&self, dx: i8, dy: i8, shape: &Shape) -> bool {
        for (r, c) in shape.iter_filled() {
            let x = self.piece.x + c as i8 + dx;
            let y = self.piece.y + r as i8 + dy;
            if x < 0 || x >= COLS as i8 || y >= ROWS as i8 {
                return true;
            }
            if y >= 0 && self.grid.is_occupied(x, y) {
                return true;
            }
        }
        false
    }

    /// Try to move the active piece by (dx, dy).
    ///
    /// A blocked sideways or upward move is rejected silently. A blocked
    /// downward move means the piece has landed and triggers the lock
    /// sequence. Returns whether the piece actually moved.
    pub fn move_piece(&mut self, dx: i8, dy: i8) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }

        if !self.collides(dx, dy, &self.piece.shape) {
            self.piece.x += dx;
            self.piece.y += dy;
            return true;
        }

        if dy > 0 {
            self.lock_piece();
        }
        false
    }

    /// Tentatively rotate the active piece clockwise, reverting if the
    /// rotated shape collides in place. Returns whether the rotation stuck.
    pub fn rotate_piece(&mut self) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }

        let rotated = rotate_cw(&self.piece.shape);
        if self.collides(0, 0, &rotated) {
            return false;
        }
        self.piece.shape = rotated;
        true
    }

    /// Lock the active piece into the grid.
    ///
    /// Commits every filled cell with in-bounds coordinates. A committed cell
    /// in the top row is a top-out: the phase flips to GameOver before any
    /// line clearing or scoring happens. Otherwise full rows are cleared
    /// (n rows add n*n*100), a fresh piece spawns, and a spawn that collides
    /// immediately also ends the game.
    fn lock_piece(&mut self) {
        let color = self.piece.color;
        let mut top_out = false;

        for (x, y) in self.piece.cells() {
            if !self.grid.is_out_of_bounds(x, y) {
                self.grid.set(x, y, Some(color));
                if y == 0 {
                    top_out = true;
                }
            }
        }

        if top_out {
            self.phase = GamePhase::GameOver;
            self.last_event = Some(LockEvent {
                lines_cleared: 0,
                score_delta: 0,
                top_out: true,
            });
            return;
        }

        let cleared = self.grid.clear_full_rows();
        let lines = cleared.len() as u32;
        let delta = lines * lines * LINE_BONUS_BASE;
        self.score += delta;

        self.piece = Piece::spawn(&mut self.rng);
        if self.collides(0, 0, &self.piece.shape) {
            self.phase = GamePhase::GameOver;
        }

        self.last_event = Some(LockEvent {
            lines_cleared: lines,
            score_delta: delta,
            top_out: false,
        });
    }

    /// Advance gravity by elapsed time. Once the accumulator exceeds the
    /// drop interval the piece moves down one row and the accumulator
    /// resets, whether or not the move succeeded (a blocked drop locks).
    /// Returns whether a gravity step fired. No-op outside Running.
    pub fn tick(&mut self, delta_ms: u32) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }

        self.drop_acc_ms += delta_ms;
        if self.drop_acc_ms > DROP_INTERVAL_MS {
            self.move_piece(0, 1);
            self.drop_acc_ms = 0;
            return true;
        }
        false
    }

    /// Apply a discrete command. Returns whether the command changed state.
    pub fn apply(&mut self, command: GameCommand) -> bool {
        match command {
            GameCommand::MoveLeft => self.move_piece(-1, 0),
            GameCommand::MoveRight => self.move_piece(1, 0),
            GameCommand::SoftDrop => self.move_piece(0, 1),
            GameCommand::Rotate => self.rotate_piece(),
            GameCommand::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Tetromino;
    use crate::types::NeonColor;

    fn running_engine() -> Engine {
        let mut engine = Engine::new(12345);
        engine.restart();
        engine
    }

    #[test]
    fn test_new_engine_is_idle() {
        let engine = Engine::new(12345);
        assert_eq!(engine.phase(), GamePhase::Idle);
        assert_eq!(engine.score(), 0);
    }

    #[test]
    fn test_begin_scan_only_from_idle() {
        let mut engine = Engine::new(1);
        engine.begin_scan();
        assert_eq!(engine.phase(), GamePhase::Scanning);

        engine.restart();
        engine.begin_scan();
        assert_eq!(engine.phase(), GamePhase::Running);
    }

    #[test]
    fn test_commands_are_noops_outside_running() {
        let mut engine = Engine::new(7);
        let piece_before = *engine.piece();

        assert!(!engine.move_piece(-1, 0));
        assert!(!engine.rotate_piece());
        assert!(!engine.tick(10_000));
        assert_eq!(*engine.piece(), piece_before);
        assert_eq!(engine.phase(), GamePhase::Idle);
    }

    #[test]
    fn test_move_round_trip() {
        let mut engine = running_engine();
        let x0 = engine.piece().x;

        assert!(engine.move_piece(-1, 0));
        assert!(engine.move_piece(1, 0));
        assert_eq!(engine.piece().x, x0);
    }

    #[test]
    fn test_gravity_fires_after_interval() {
        let mut engine = running_engine();
        let y0 = engine.piece().y;

        assert!(!engine.tick(DROP_INTERVAL_MS));
        assert!(engine.tick(1));
        assert_eq!(engine.piece().y, y0 + 1);
    }

    #[test]
    fn test_blocked_descent_locks_and_spawns() {
        let mut engine = running_engine();
        engine.set_piece(Piece::new(
            Tetromino::O.shape(),
            NeonColor::Cyan,
            0,
            (ROWS - 2) as i8,
        ));

        assert!(!engine.move_piece(0, 1));
        assert!(engine.grid().is_occupied(0, (ROWS - 1) as i8));
        assert!(engine.grid().is_occupied(1, (ROWS - 2) as i8));
        // A fresh piece took over at spawn.
        assert_eq!(engine.piece().y, 0);
        assert!(engine.is_running());
    }

    #[test]
    fn test_rotation_reverts_on_collision() {
        let mut engine = running_engine();
        // Horizontal I resting on the floor: rotating to vertical would push
        // three cells below the bottom row.
        engine.set_piece(Piece::new(
            Tetromino::I.shape(),
            NeonColor::Cyan,
            0,
            (ROWS - 1) as i8,
        ));

        let before = engine.piece().shape;
        assert!(!engine.rotate_piece());
        assert_eq!(engine.piece().shape, before);
    }
}
