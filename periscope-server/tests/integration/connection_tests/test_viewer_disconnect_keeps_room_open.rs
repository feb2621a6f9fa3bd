use periscope_core::{ConnectionId, ServerMessage};

use crate::integration::{create_test_relay, init_tracing};
use crate::utils::{create_room, disconnect, join_room};

#[tokio::test]
async fn test_viewer_disconnect_keeps_room_open() {
    init_tracing();

    let (cmd_tx, signaling) = create_test_relay();
    let host = ConnectionId::new();
    let viewer = ConnectionId::new();

    create_room(&cmd_tx, host, "r1", Some("secret")).await;
    join_room(&cmd_tx, viewer, "r1", Some("secret")).await;
    disconnect(&cmd_tx, viewer).await;

    // The room survives a viewer leaving: a later join still succeeds.
    let viewer2 = ConnectionId::new();
    join_room(&cmd_tx, viewer2, "r1", Some("secret")).await;

    assert!(signaling.wait_for_messages(5, 5000).await);
    assert_eq!(
        signaling.messages_for(&viewer2).await,
        vec![ServerMessage::Joined {
            room_id: "r1".into(),
            host_connection_id: host,
        }]
    );

    // And nobody was told the room closed.
    assert!(!signaling
        .all_messages()
        .await
        .iter()
        .any(|(_, m)| matches!(m, ServerMessage::RoomClosed)));
}
