use crate::room::{Room, RoomCommand};
use crate::signaling::SignalingOutput;
use periscope_core::{ConnectionId, ServerMessage};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::info;

/// Single-writer actor owning the room table. All mutations go through its
/// command channel, so create/join/teardown sequences are atomic with respect
/// to each other.
pub struct RoomRelay {
    rooms: HashMap<String, Room>,
    command_rx: mpsc::Receiver<RoomCommand>,
    signaling: Arc<dyn SignalingOutput>,
}

impl RoomRelay {
    pub fn new(command_rx: mpsc::Receiver<RoomCommand>, signaling: Arc<dyn SignalingOutput>) -> Self {
        Self {
            rooms: HashMap::new(),
            command_rx,
            signaling,
        }
    }

    pub async fn run(mut self) {
        info!("Room relay event loop started");

        while let Some(cmd) = self.command_rx.recv().await {
            self.handle_command(cmd).await;
        }

        info!("Room relay event loop finished");
    }

    async fn handle_command(&mut self, cmd: RoomCommand) {
        match cmd {
            RoomCommand::CreateRoom {
                conn,
                room_id,
                password,
            } => self.create_room(conn, room_id, password).await,

            RoomCommand::JoinRoom {
                conn,
                room_id,
                password,
            } => self.join_room(conn, room_id, password).await,

            RoomCommand::Offer {
                conn,
                room_id,
                offer,
            } => {
                self.relay_to_room(conn, &room_id, ServerMessage::Offer { offer, from: conn })
                    .await;
            }

            RoomCommand::Answer {
                conn,
                room_id,
                answer,
            } => {
                self.relay_to_room(conn, &room_id, ServerMessage::Answer { answer, from: conn })
                    .await;
            }

            RoomCommand::IceCandidate {
                conn,
                room_id,
                candidate,
            } => {
                self.relay_to_room(
                    conn,
                    &room_id,
                    ServerMessage::IceCandidate {
                        candidate,
                        from: conn,
                    },
                )
                .await;
            }

            RoomCommand::Disconnect { conn } => self.close_hosted_rooms(conn).await,
        }
    }

    async fn create_room(
        &mut self,
        conn: ConnectionId,
        room_id: Option<String>,
        password: Option<String>,
    ) {
        let Some(room_id) = room_id.filter(|id| !id.is_empty()) else {
            self.signaling
                .send(conn, ServerMessage::Error("roomId required".into()))
                .await;
            return;
        };

        // Re-creating an id is allowed only while nobody has joined it yet;
        // overwriting a room with live viewers would orphan them.
        if let Some(existing) = self.rooms.get(&room_id) {
            if existing.has_viewers() {
                self.signaling
                    .send(conn, ServerMessage::Error("roomId already in use".into()))
                    .await;
                return;
            }
        }

        info!("Room {} created by {}", room_id, conn);
        self.rooms.insert(room_id.clone(), Room::new(conn, password));
        self.signaling
            .send(conn, ServerMessage::RoomCreated { room_id })
            .await;
    }

    async fn join_room(
        &mut self,
        conn: ConnectionId,
        room_id: Option<String>,
        password: Option<String>,
    ) {
        let room = match room_id.as_deref() {
            Some(id) => self.rooms.get_mut(id),
            None => None,
        };

        let Some(room) = room else {
            self.signaling
                .send(conn, ServerMessage::JoinFailed("Room does not exist".into()))
                .await;
            return;
        };

        // Exact match on Option<String>: a room created without a password only
        // admits joins that also omit it.
        if room.password != password {
            self.signaling
                .send(conn, ServerMessage::JoinFailed("Bad password".into()))
                .await;
            return;
        }

        room.members.insert(conn);
        let host = room.host;
        let room_id = room_id.unwrap_or_default();

        info!("{} joined {}", conn, room_id);
        self.signaling
            .send(
                conn,
                ServerMessage::Joined {
                    room_id,
                    host_connection_id: host,
                },
            )
            .await;
        self.signaling
            .send(host, ServerMessage::ViewerJoined { viewer_id: conn })
            .await;
    }

    /// Fan a message out to every member of `room_id` except the sender.
    /// Membership of the sender itself is not checked; an unknown room relays
    /// to nobody.
    async fn relay_to_room(&self, sender: ConnectionId, room_id: &str, msg: ServerMessage) {
        let Some(room) = self.rooms.get(room_id) else {
            return;
        };

        for member in room.members.iter().filter(|m| **m != sender) {
            self.signaling.send(*member, msg.clone()).await;
        }
    }

    /// Tear down every room hosted by the closing connection: broadcast
    /// `room-closed` to its whole group (host included) and drop the entry.
    /// Rooms where the connection was only a viewer are left untouched.
    async fn close_hosted_rooms(&mut self, conn: ConnectionId) {
        let hosted: Vec<String> = self
            .rooms
            .iter()
            .filter(|(_, room)| room.host == conn)
            .map(|(id, _)| id.clone())
            .collect();

        for room_id in hosted {
            if let Some(room) = self.rooms.remove(&room_id) {
                info!("Room {} closed (host {} disconnected)", room_id, conn);

                for member in &room.members {
                    self.signaling.send(*member, ServerMessage::RoomClosed).await;
                }
            }
        }
    }
}
