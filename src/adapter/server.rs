//! TCP server for the detector bridge
//!
//! Accepts line-delimited JSON connections, forwards parsed client messages
//! to the game loop, and broadcasts observation lines to every connected
//! client. Uses tokio for async networking; unparseable lines are dropped
//! so a glitchy detector cannot wedge the game.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::{mpsc, oneshot, RwLock};

use crate::adapter::protocol::{ClientMessage, ServerMessage};

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 7878,
        }
    }
}

impl ServerConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        use std::env;

        let host = env::var("HANDBLOCK_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("HANDBLOCK_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(7878);

        Self { host, port }
    }

    /// Check if the adapter is disabled via environment
    pub fn is_disabled() -> bool {
        std::env::var("HANDBLOCK_DISABLED")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false)
    }
}

/// Handle to a connected client
struct ClientHandle {
    id: usize,
    tx: mpsc::UnboundedSender<String>,
}

type Clients = Arc<RwLock<Vec<ClientHandle>>>;

/// Run the bridge server until the listener fails or is dropped.
///
/// `msg_tx` delivers parsed client messages to the game loop; `out_rx`
/// receives observation lines to broadcast. `ready` (if given) reports the
/// bound address once listening, which tests use to connect to port 0.
pub async fn run_server(
    config: ServerConfig,
    msg_tx: mpsc::Sender<ClientMessage>,
    mut out_rx: mpsc::UnboundedReceiver<String>,
    ready: Option<oneshot::Sender<SocketAddr>>,
) -> anyhow::Result<()> {
    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    let local_addr = listener.local_addr()?;
    if let Some(ready) = ready {
        let _ = ready.send(local_addr);
    }

    let clients: Clients = Arc::new(RwLock::new(Vec::new()));

    // Broadcast task: fan observation lines out to every client.
    let broadcast_clients = clients.clone();
    tokio::spawn(async move {
        while let Some(line) = out_rx.recv().await {
            let mut clients = broadcast_clients.write().await;
            clients.retain(|client| client.tx.send(line.clone()).is_ok());
        }
    });

    let mut next_id = 0usize;
    loop {
        let (stream, _addr) = listener.accept().await?;
        let id = next_id;
        next_id += 1;

        let clients = clients.clone();
        let msg_tx = msg_tx.clone();
        tokio::spawn(async move {
            let _ = handle_client(stream, id, clients, msg_tx).await;
        });
    }
}

async fn handle_client(
    stream: TcpStream,
    id: usize,
    clients: Clients,
    msg_tx: mpsc::Sender<ClientMessage>,
) -> anyhow::Result<()> {
    let (read_half, mut write_half) = stream.into_split();

    let (tx, mut rx) = mpsc::unbounded_channel::<String>();
    clients.write().await.push(ClientHandle { id, tx });

    // Writer task: welcome line first, then whatever the broadcast sends.
    let writer = tokio::spawn(async move {
        let welcome = ServerMessage::welcome().to_line();
        if write_half.write_all(welcome.as_bytes()).await.is_err() {
            return;
        }
        let _ = write_half.write_all(b"\n").await;

        while let Some(line) = rx.recv().await {
            if write_half.write_all(line.as_bytes()).await.is_err() {
                break;
            }
            if write_half.write_all(b"\n").await.is_err() {
                break;
            }
        }
    });

    let mut lines = BufReader::new(read_half).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Ok(msg) = serde_json::from_str::<ClientMessage>(line) {
            if msg_tx.send(msg).await.is_err() {
                break;
            }
        }
    }

    // Reader closed; drop our handle so broadcasts stop targeting it.
    clients.write().await.retain(|client| client.id != id);
    writer.abort();
    Ok(())
}
