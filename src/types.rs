//! Core types shared across the crate.
//! This module contains pure data types with no external dependencies.

/// Playfield dimensions.
pub const ROWS: u8 = 20;
pub const COLS: u8 = 10;

/// Spawn position for new pieces (top-left anchor).
pub const SPAWN_X: i8 = 3;
pub const SPAWN_Y: i8 = 0;

/// Gravity timing (milliseconds). The piece drops one row each time the
/// accumulated tick time exceeds this interval.
pub const DROP_INTERVAL_MS: u32 = 500;

/// Fixed tick used by the terminal harness.
pub const TICK_MS: u32 = 16;

/// Gesture movement repeat delays (milliseconds). The fast tier applies when
/// the cursor is near a frame edge, the slow tier in the rest of the zone.
pub const MOVE_DELAY_FAST_MS: u64 = 100;
pub const MOVE_DELAY_SLOW_MS: u64 = 200;

/// Pinch-rotate cooldown (milliseconds). Strictly longer than any movement
/// delay so a held pinch cannot out-pace horizontal motion.
pub const ROTATE_DELAY_MS: u64 = 500;

/// Horizontal cursor zones, in percent of the mirrored frame width.
pub const ZONE_LEFT_PCT: f32 = 40.0;
pub const ZONE_RIGHT_PCT: f32 = 60.0;
pub const ZONE_FAST_LEFT_PCT: f32 = 20.0;
pub const ZONE_FAST_RIGHT_PCT: f32 = 80.0;

/// Pinch detection threshold in normalized landmark space.
pub const PINCH_THRESHOLD: f32 = 0.05;

/// Length of each scan-to-start countdown stage (two stages total).
pub const SCAN_STAGE_MS: u64 = 1000;

/// Line clear bonus: clearing `n` rows in one lock scores `n * n * 100`.
pub const LINE_BONUS_BASE: u32 = 100;

/// Width of the zero-padded score string shown by render layers.
pub const SCORE_DIGITS: usize = 6;

/// Neon block palette. Colors are chosen independently of shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NeonColor {
    Cyan,
    Pink,
    Green,
    Gold,
    Red,
    Purple,
    Orange,
}

impl NeonColor {
    pub const ALL: [Self; 7] = [
        Self::Cyan,
        Self::Pink,
        Self::Green,
        Self::Gold,
        Self::Red,
        Self::Purple,
        Self::Orange,
    ];

    /// CSS hex string used by render layers.
    pub fn hex(&self) -> &'static str {
        match self {
            Self::Cyan => "#00f3ff",
            Self::Pink => "#ff00ff",
            Self::Green => "#00ff41",
            Self::Gold => "#ffd700",
            Self::Red => "#ff1a1a",
            Self::Purple => "#bd00ff",
            Self::Orange => "#ff9100",
        }
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Self::Cyan => (0x00, 0xf3, 0xff),
            Self::Pink => (0xff, 0x00, 0xff),
            Self::Green => (0x00, 0xff, 0x41),
            Self::Gold => (0xff, 0xd7, 0x00),
            Self::Red => (0xff, 0x1a, 0x1a),
            Self::Purple => (0xbd, 0x00, 0xff),
            Self::Orange => (0xff, 0x91, 0x00),
        }
    }
}

/// Cell on the grid (None = empty, Some = locked block color).
pub type Cell = Option<NeonColor>;

/// Game lifecycle phase.
///
/// `Idle` is the pre-game landing state, `Scanning` the gesture warm-up,
/// `GameOver` is terminal until a restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    Idle,
    Scanning,
    Running,
    GameOver,
}

impl GamePhase {
    /// Wire string for the adapter protocol.
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Idle => "idle",
            GamePhase::Scanning => "scanning",
            GamePhase::Running => "running",
            GamePhase::GameOver => "gameOver",
        }
    }
}

/// Discrete commands the engine accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    MoveLeft,
    MoveRight,
    Rotate,
    SoftDrop,
    Restart,
}

impl GameCommand {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameCommand::MoveLeft),
            "moveright" => Some(GameCommand::MoveRight),
            "rotate" => Some(GameCommand::Rotate),
            "softdrop" => Some(GameCommand::SoftDrop),
            "restart" => Some(GameCommand::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameCommand::MoveLeft => "moveLeft",
            GameCommand::MoveRight => "moveRight",
            GameCommand::Rotate => "rotate",
            GameCommand::SoftDrop => "softDrop",
            GameCommand::Restart => "restart",
        }
    }
}

/// Display status side channel. Render layers show these verbatim; the
/// engine phase remains the authoritative state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusSignal {
    SystemActive,
    MovingLeft,
    MovingRight,
    Holding,
    Rotating,
    Terminated,
    ShowHand,
    HandDetected,
    StartingSoon,
}

impl StatusSignal {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusSignal::SystemActive => "SYSTEM ACTIVE",
            StatusSignal::MovingLeft => "MOVING LEFT",
            StatusSignal::MovingRight => "MOVING RIGHT",
            StatusSignal::Holding => "HOLDING",
            StatusSignal::Rotating => "ROTATING",
            StatusSignal::Terminated => "TERMINATED",
            StatusSignal::ShowHand => "PLEASE SHOW HAND TO CAMERA",
            StatusSignal::HandDetected => "HAND DETECTED! STARTING IN 2...",
            StatusSignal::StartingSoon => "STARTING IN 1...",
        }
    }
}

/// Last lock outcome (consumed by observers).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub score_delta: u32,
    pub top_out: bool,
}
