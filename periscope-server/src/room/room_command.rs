use periscope_core::ConnectionId;
use serde_json::Value;

/// Commands entering the relay from the signaling layer (WebSocket), one per
/// inbound client event.
#[derive(Debug)]
pub enum RoomCommand {
    /// A connection wants to open a room and become its host.
    CreateRoom {
        conn: ConnectionId,
        room_id: Option<String>,
        password: Option<String>,
    },

    /// A connection wants to join an existing room as a viewer.
    JoinRoom {
        conn: ConnectionId,
        room_id: Option<String>,
        password: Option<String>,
    },

    /// SDP offer to relay to the rest of the room.
    Offer {
        conn: ConnectionId,
        room_id: String,
        offer: Value,
    },

    /// SDP answer to relay to the rest of the room.
    Answer {
        conn: ConnectionId,
        room_id: String,
        answer: Value,
    },

    /// ICE candidate to relay to the rest of the room.
    IceCandidate {
        conn: ConnectionId,
        room_id: String,
        candidate: Value,
    },

    /// The connection is closing. Fired once, before the transport drops it.
    Disconnect { conn: ConnectionId },
}
