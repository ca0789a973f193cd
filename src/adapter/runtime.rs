//! Adapter runtime integration.
//!
//! Bridges the sync game loop with the async TCP server: client messages
//! arrive through a bounded channel the loop drains once per tick, and
//! observation lines go out through an unbounded channel the server
//! broadcasts.

use tokio::runtime::Runtime;
use tokio::sync::mpsc;

use crate::adapter::protocol::ClientMessage;
use crate::adapter::server::{run_server, ServerConfig};

/// Backpressure bound for inbound detector frames. Frames past this are
/// dropped by the server side rather than queued into a stale burst.
const MAX_PENDING_MESSAGES: usize = 32;

/// Running adapter instance.
pub struct Adapter {
    _rt: Runtime,
    msg_rx: mpsc::Receiver<ClientMessage>,
    out_tx: mpsc::UnboundedSender<String>,
}

impl Adapter {
    /// Start the adapter from environment variables.
    ///
    /// Returns None if `HANDBLOCK_DISABLED` is set or the runtime cannot be
    /// created.
    pub fn start_from_env() -> Option<Self> {
        if ServerConfig::is_disabled() {
            return None;
        }
        Self::start(ServerConfig::from_env())
    }

    pub fn start(config: ServerConfig) -> Option<Self> {
        let (msg_tx, msg_rx) = mpsc::channel::<ClientMessage>(MAX_PENDING_MESSAGES);
        let (out_tx, out_rx) = mpsc::unbounded_channel::<String>();

        let rt = Runtime::new().ok()?;
        rt.spawn(async move {
            let _ = run_server(config, msg_tx, out_rx, None).await;
        });

        Some(Self {
            _rt: rt,
            msg_rx,
            out_tx,
        })
    }

    /// Non-blocking poll for the next client message.
    pub fn try_recv(&mut self) -> Option<ClientMessage> {
        self.msg_rx.try_recv().ok()
    }

    /// Queue a line for broadcast to all connected clients.
    pub fn broadcast(&self, line: String) {
        let _ = self.out_tx.send(line);
    }
}
