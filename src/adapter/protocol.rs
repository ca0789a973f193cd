//! Protocol module - JSON message types for the detector bridge
//!
//! Line-delimited JSON. A detector process streams `frame` messages (one per
//! detection cycle) and may forward the UI's `start`/`restart` buttons; the
//! server answers with a `welcome` on connect and broadcasts `observation`
//! lines for render layers.

use serde::{Deserialize, Serialize};

use crate::core::GameSnapshot;
use crate::types::{StatusSignal, COLS, ROWS};

/// Client -> server messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClientMessage {
    /// One detection cycle. `landmarks` is a list of normalized `[x, y]`
    /// points, or absent/null when no hand was found.
    Frame {
        seq: u64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        landmarks: Option<Vec<[f32; 2]>>,
    },
    /// UI start button: enter the scan phase.
    Start { seq: u64 },
    /// UI restart button: straight into a fresh running game.
    Restart { seq: u64 },
}

/// Server -> client messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ServerMessage {
    Welcome {
        protocol_version: String,
        rows: u8,
        cols: u8,
    },
    Observation(ObservationBody),
}

/// Full state observation for render layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationBody {
    pub seq: u64,
    pub score: u32,
    /// Zero-padded display string, mirroring what the UI shows.
    pub score_text: String,
    pub phase: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Per-cell hex color, or null for empty, row-major top to bottom.
    pub grid: Vec<Vec<Option<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub piece: Option<PieceBody>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieceBody {
    pub cells: Vec<[i8; 2]>,
    pub color: String,
}

impl ObservationBody {
    pub fn from_snapshot(seq: u64, snap: &GameSnapshot, status: Option<StatusSignal>) -> Self {
        let grid = snap
            .grid
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map(|color| color.hex().to_string()))
                    .collect()
            })
            .collect();

        let piece = snap.piece.as_ref().map(|piece| PieceBody {
            cells: piece.cells.iter().map(|&(x, y)| [x, y]).collect(),
            color: piece.color.hex().to_string(),
        });

        Self {
            seq,
            score: snap.score,
            score_text: snap.score_string(),
            phase: snap.phase.as_str().to_string(),
            status: status.map(|s| s.as_str().to_string()),
            grid,
            piece,
        }
    }
}

impl ServerMessage {
    pub fn welcome() -> Self {
        Self::Welcome {
            protocol_version: "1.0.0".to_string(),
            rows: ROWS,
            cols: COLS,
        }
    }

    /// Serialize as one protocol line (no trailing newline).
    pub fn to_line(&self) -> String {
        serde_json::to_string(self).expect("protocol types always serialize")
    }
}
