use periscope_core::{ConnectionId, ServerMessage};

use crate::integration::{create_test_relay, init_tracing};
use crate::utils::{create_room, disconnect, join_room};

#[tokio::test]
async fn test_host_disconnect_closes_room() {
    init_tracing();

    let (cmd_tx, signaling) = create_test_relay();
    let host = ConnectionId::new();
    let viewer = ConnectionId::new();

    create_room(&cmd_tx, host, "r1", Some("secret")).await;
    join_room(&cmd_tx, viewer, "r1", Some("secret")).await;
    disconnect(&cmd_tx, host).await;

    // room-closed goes to the whole group, the departing host included.
    assert!(signaling.wait_for_messages(5, 5000).await);
    assert_eq!(
        signaling.messages_for(&viewer).await.last(),
        Some(&ServerMessage::RoomClosed)
    );
    assert_eq!(
        signaling.messages_for(&host).await.last(),
        Some(&ServerMessage::RoomClosed)
    );

    // Teardown removed the entry: the id no longer resolves.
    let late_viewer = ConnectionId::new();
    join_room(&cmd_tx, late_viewer, "r1", Some("secret")).await;

    assert!(signaling.wait_for_messages(6, 5000).await);
    assert_eq!(
        signaling.messages_for(&late_viewer).await,
        vec![ServerMessage::JoinFailed("Room does not exist".into())]
    );
}

#[tokio::test]
async fn test_host_disconnect_closes_every_hosted_room() {
    init_tracing();

    let (cmd_tx, signaling) = create_test_relay();
    let host = ConnectionId::new();
    let viewer_a = ConnectionId::new();
    let viewer_b = ConnectionId::new();

    create_room(&cmd_tx, host, "a", None).await;
    create_room(&cmd_tx, host, "b", None).await;
    join_room(&cmd_tx, viewer_a, "a", None).await;
    join_room(&cmd_tx, viewer_b, "b", None).await;
    disconnect(&cmd_tx, host).await;

    // 2 created + 4 join + 4 room-closed (host twice, one viewer each).
    assert!(signaling.wait_for_messages(10, 5000).await);
    assert_eq!(
        signaling.messages_for(&viewer_a).await.last(),
        Some(&ServerMessage::RoomClosed)
    );
    assert_eq!(
        signaling.messages_for(&viewer_b).await.last(),
        Some(&ServerMessage::RoomClosed)
    );
}
