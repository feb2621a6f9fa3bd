use crate::model::connection::ConnectionId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Messages a client sends to the relay. Negotiation payloads (`offer`, `answer`,
/// `candidate`) are opaque JSON, forwarded without inspection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(
    tag = "op",
    content = "d",
    rename_all = "kebab-case",
    rename_all_fields = "camelCase"
)]
pub enum ClientMessage {
    CreateRoom {
        room_id: Option<String>,
        password: Option<String>,
    },
    JoinRoom {
        room_id: Option<String>,
        password: Option<String>,
    },
    Offer {
        room_id: String,
        offer: Value,
    },
    Answer {
        room_id: String,
        answer: Value,
    },
    IceCandidate {
        room_id: String,
        candidate: Value,
    },
}

/// Messages the relay sends to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "op",
    content = "d",
    rename_all = "kebab-case",
    rename_all_fields = "camelCase"
)]
pub enum ServerMessage {
    RoomCreated {
        room_id: String,
    },
    #[serde(rename = "err")]
    Error(String),
    Joined {
        room_id: String,
        host_connection_id: ConnectionId,
    },
    JoinFailed(String),
    ViewerJoined {
        viewer_id: ConnectionId,
    },
    Offer {
        offer: Value,
        from: ConnectionId,
    },
    Answer {
        answer: Value,
        from: ConnectionId,
    },
    IceCandidate {
        candidate: Value,
        from: ConnectionId,
    },
    RoomClosed,
}
