use crate::room::RoomCommand;
use crate::signaling::SignalingService;
use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use periscope_core::{ClientMessage, ConnectionId};
use tokio::sync::mpsc;
use tracing::{error, info, warn};

pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(service): State<SignalingService>,
) -> impl IntoResponse {
    let conn = ConnectionId::new();

    ws.on_upgrade(move |socket| handle_socket(socket, conn, service))
}

async fn handle_socket(socket: WebSocket, conn: ConnectionId, service: SignalingService) {
    info!("New WebSocket connection: {}", conn);

    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel();

    service.add_connection(conn, tx);

    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(msg).await.is_err() {
                break;
            }
        }
    });

    let mut recv_task = tokio::spawn({
        let service = service.clone();

        async move {
            while let Some(Ok(msg)) = receiver.next().await {
                match msg {
                    Message::Text(text) => match serde_json::from_str::<ClientMessage>(&text) {
                        Ok(client_msg) => {
                            if let Err(e) = service.room_cmd_tx.send(to_command(conn, client_msg)).await
                            {
                                error!("Relay died: {}", e);
                                break;
                            }
                        }
                        Err(e) => warn!("Invalid message from {}: {:?}", conn, e),
                    },
                    Message::Close(_) => break,
                    _ => {}
                }
            }
        }
    });

    tokio::select! {
        _ = (&mut send_task) => recv_task.abort(),
        _ = (&mut recv_task) => send_task.abort(),
    };

    // Pre-close hook: the relay must see the disconnect exactly once, and
    // through the same channel as the connection's other events so it is
    // ordered after them.
    let _ = service
        .room_cmd_tx
        .send(RoomCommand::Disconnect { conn })
        .await;

    service.remove_connection(&conn);
    info!("WebSocket disconnected: {}", conn);
}

fn to_command(conn: ConnectionId, msg: ClientMessage) -> RoomCommand {
    match msg {
        ClientMessage::CreateRoom { room_id, password } => RoomCommand::CreateRoom {
            conn,
            room_id,
            password,
        },
        ClientMessage::JoinRoom { room_id, password } => RoomCommand::JoinRoom {
            conn,
            room_id,
            password,
        },
        ClientMessage::Offer { room_id, offer } => RoomCommand::Offer {
            conn,
            room_id,
            offer,
        },
        ClientMessage::Answer { room_id, answer } => RoomCommand::Answer {
            conn,
            room_id,
            answer,
        },
        ClientMessage::IceCandidate { room_id, candidate } => RoomCommand::IceCandidate {
            conn,
            room_id,
            candidate,
        },
    }
}
