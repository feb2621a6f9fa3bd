use crate::room::RoomCommand;
use crate::signaling::SignalingOutput;
use async_trait::async_trait;
use axum::extract::ws::Message;
use dashmap::DashMap;
use periscope_core::{ConnectionId, ServerMessage};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, warn};

struct SignalingInner {
    connections: DashMap<ConnectionId, mpsc::UnboundedSender<Message>>,
}

/// Registry of live WebSocket connections and the channel into the relay.
/// Cheap to clone; shared between the axum handlers and the relay actor.
#[derive(Clone)]
pub struct SignalingService {
    inner: Arc<SignalingInner>,
    pub(crate) room_cmd_tx: mpsc::Sender<RoomCommand>,
}

impl SignalingService {
    pub fn new(room_cmd_tx: mpsc::Sender<RoomCommand>) -> Self {
        Self {
            inner: Arc::new(SignalingInner {
                connections: DashMap::new(),
            }),
            room_cmd_tx,
        }
    }

    pub fn add_connection(&self, conn: ConnectionId, tx: mpsc::UnboundedSender<Message>) {
        self.inner.connections.insert(conn, tx);
    }

    pub fn remove_connection(&self, conn: &ConnectionId) {
        self.inner.connections.remove(conn);
    }

    pub fn send_message(&self, conn: ConnectionId, msg: &ServerMessage) {
        if let Some(peer) = self.inner.connections.get(&conn) {
            match serde_json::to_string(msg) {
                Ok(json) => {
                    if let Err(e) = peer.send(Message::Text(json.into())) {
                        error!("Failed to send WS message to {}: {:?}", conn, e);
                    }
                }
                Err(e) => error!("Failed to serialize server message: {}", e),
            }
        } else {
            warn!("Attempted to send to disconnected connection {}", conn);
        }
    }
}

#[async_trait]
impl SignalingOutput for SignalingService {
    async fn send(&self, conn: ConnectionId, msg: ServerMessage) {
        self.send_message(conn, &msg);
    }
}
