//! Adapter module - detector bridge over TCP with a JSON protocol
//!
//! An external hand-landmark detector connects over TCP and streams one
//! `frame` message per detection cycle (landmark points, or no hand). The
//! game loop drains those messages, runs them through the gesture
//! interpreter, and broadcasts `observation` lines back for render layers.
//!
//! # Protocol
//!
//! Line-delimited JSON:
//!
//! ```text
//! Client -> Server: {"type":"frame","seq":1,"landmarks":[[0.42,0.55], ... 21 points]}
//! Client -> Server: {"type":"frame","seq":2}                 // no hand this cycle
//! Client -> Server: {"type":"start","seq":3}
//! Server -> Client: {"type":"welcome","protocol_version":"1.0.0","rows":20,"cols":10}
//! Server -> Client: {"type":"observation","seq":4,"score":100,"score_text":"000100",...}
//! ```
//!
//! # Environment variables
//!
//! - `HANDBLOCK_HOST`: bind address (default: "127.0.0.1")
//! - `HANDBLOCK_PORT`: port number (default: 7878)
//! - `HANDBLOCK_DISABLED`: set to "1" or "true" to disable the adapter
//!
//! Connect with netcat for manual testing:
//!
//! ```bash
//! nc 127.0.0.1 7878
//! {"type":"start","seq":1}
//! ```

pub mod protocol;
pub mod runtime;
pub mod server;

pub use protocol::{ClientMessage, ObservationBody, PieceBody, ServerMessage};
pub use runtime::Adapter;
pub use server::{run_server, ServerConfig};
