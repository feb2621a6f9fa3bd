use async_trait::async_trait;
use periscope_core::{ConnectionId, ServerMessage};

/// Outbound side of the transport, implemented by the WebSocket server so the
/// relay can deliver messages to specific connections.
///
/// Delivery is fire-and-forget: implementations never report failure back to
/// the relay and never retry.
#[async_trait]
pub trait SignalingOutput: Send + Sync {
    /// Deliver one message to one connection.
    async fn send(&self, conn: ConnectionId, msg: ServerMessage);
}
