//! Gesture interpreter - hand frames to engine commands.
//!
//! The bridge between the external landmark detector and the engine: derives
//! a mirrored horizontal cursor from the palm base, maps cursor zones to
//! rate-limited move commands (faster repeats near the frame edges), and a
//! pinch to a rotate with its own longer cooldown. During the Scanning phase
//! it drives the start countdown instead.

use arrayvec::ArrayVec;

use crate::gesture::frame::HandFrame;
use crate::gesture::scan::{ScanCountdown, ScanEvent};
use crate::types::{
    GameCommand, GamePhase, StatusSignal, MOVE_DELAY_FAST_MS, MOVE_DELAY_SLOW_MS, PINCH_THRESHOLD,
    ROTATE_DELAY_MS, ZONE_FAST_LEFT_PCT, ZONE_FAST_RIGHT_PCT, ZONE_LEFT_PCT, ZONE_RIGHT_PCT,
};

/// What one frame produced: commands for the engine, a start confirmation
/// from the scan countdown, a display status, and the cursor position.
#[derive(Debug, Clone, Default)]
pub struct FrameOutcome {
    pub commands: ArrayVec<GameCommand, 2>,
    pub start_confirmed: bool,
    pub status: Option<StatusSignal>,
    pub cursor_percent: Option<f32>,
}

#[derive(Debug, Clone)]
pub struct GestureInterpreter {
    last_move_ms: u64,
    last_rotate_ms: u64,
    scan: ScanCountdown,
}

impl GestureInterpreter {
    pub fn new() -> Self {
        Self {
            last_move_ms: 0,
            last_rotate_ms: 0,
            scan: ScanCountdown::new(),
        }
    }

    pub fn scan(&self) -> &ScanCountdown {
        &self.scan
    }

    /// Rearm the scan countdown and drop rate-limiter history.
    pub fn reset(&mut self) {
        self.last_move_ms = 0;
        self.last_rotate_ms = 0;
        self.scan.reset();
    }

    /// Consume one detection cycle. `frame` is None when no hand was found.
    /// `now_ms` is any monotonic millisecond clock supplied by the caller.
    pub fn process(
        &mut self,
        phase: GamePhase,
        frame: Option<&HandFrame>,
        now_ms: u64,
    ) -> FrameOutcome {
        let mut out = FrameOutcome::default();

        let Some(frame) = frame else {
            // No hand: suppress all intents; an in-progress countdown cancels.
            if phase == GamePhase::Scanning
                && self.scan.observe(false, now_ms) == Some(ScanEvent::Cancelled)
            {
                out.status = Some(StatusSignal::ShowHand);
            }
            return out;
        };

        if phase == GamePhase::Scanning {
            match self.scan.observe(true, now_ms) {
                Some(ScanEvent::Armed) => out.status = Some(StatusSignal::HandDetected),
                Some(ScanEvent::Advanced) => out.status = Some(StatusSignal::StartingSoon),
                Some(ScanEvent::Confirmed) => {
                    out.start_confirmed = true;
                    out.status = Some(StatusSignal::SystemActive);
                }
                _ => {}
            }
            return out;
        }

        if phase != GamePhase::Running {
            return out;
        }

        let cursor = frame.cursor_percent();
        out.cursor_percent = Some(cursor);

        if cursor < ZONE_LEFT_PCT {
            let delay = if cursor < ZONE_FAST_LEFT_PCT {
                MOVE_DELAY_FAST_MS
            } else {
                MOVE_DELAY_SLOW_MS
            };
            if now_ms.saturating_sub(self.last_move_ms) > delay {
                out.commands.push(GameCommand::MoveLeft);
                self.last_move_ms = now_ms;
                out.status = Some(StatusSignal::MovingLeft);
            }
        } else if cursor > ZONE_RIGHT_PCT {
            let delay = if cursor > ZONE_FAST_RIGHT_PCT {
                MOVE_DELAY_FAST_MS
            } else {
                MOVE_DELAY_SLOW_MS
            };
            if now_ms.saturating_sub(self.last_move_ms) > delay {
                out.commands.push(GameCommand::MoveRight);
                self.last_move_ms = now_ms;
                out.status = Some(StatusSignal::MovingRight);
            }
        } else {
            out.status = Some(StatusSignal::Holding);
        }

        if frame.pinch_distance() < PINCH_THRESHOLD
            && now_ms.saturating_sub(self.last_rotate_ms) > ROTATE_DELAY_MS
        {
            out.commands.push(GameCommand::Rotate);
            self.last_rotate_ms = now_ms;
            out.status = Some(StatusSignal::Rotating);
        }

        out
    }
}

impl Default for GestureInterpreter {
    fn default() -> Self {
        Self::new()
    }
}
