//! Gesture module - external-input adapter for hand-landmark frames
//!
//! Translates raw landmark frames into discrete engine commands with
//! debounce/rate-limiting, and runs the scan-to-start countdown. Knows
//! nothing about cameras or detection models; frames arrive from outside.

pub mod frame;
pub mod interpreter;
pub mod scan;

pub use frame::{HandFrame, NormPoint, INDEX_TIP, LANDMARK_COUNT, PALM_BASE, THUMB_TIP, WRIST};
pub use interpreter::{FrameOutcome, GestureInterpreter};
pub use scan::{ScanCountdown, ScanEvent, ScanState};
