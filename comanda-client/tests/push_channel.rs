// comanda-client/tests/push_channel.rs
// Push channel wire and reconnection tests against a local TCP listener.

use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use comanda_client::push::{encode_frame, ConnectionStatus, PushClient, ReconnectPolicy};
use comanda_client::TableEvent;
use shared::message::{NewOrderPayload, PushMessage, TableStatusPayload};
use shared::models::TableStatus;

async fn recv_event(
    rx: &mut tokio::sync::broadcast::Receiver<TableEvent>,
) -> TableEvent {
    tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timed out waiting for push event")
        .expect("event channel closed")
}

#[tokio::test]
async fn frames_decode_into_events_in_order() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap().to_string();
    let (ready_tx, ready_rx) = oneshot::channel::<()>();

    let server = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        ready_rx.await.unwrap();

        stream
            .write_all(&encode_frame(&PushMessage::new_order(&NewOrderPayload {
                table_id: 2,
                confirmed: false,
            })))
            .await
            .unwrap();
        stream
            .write_all(&encode_frame(&PushMessage::table_status(&TableStatusPayload {
                table_id: 2,
                status: TableStatus::Served,
            })))
            .await
            .unwrap();
    });

    let client = PushClient::connect(&addr, ReconnectPolicy::disabled())
        .await
        .unwrap();
    let mut events = client.subscribe();
    ready_tx.send(()).unwrap();

    assert_eq!(
        recv_event(&mut events).await,
        TableEvent::NewOrder {
            table_id: 2,
            confirmed: false,
        }
    );
    assert_eq!(
        recv_event(&mut events).await,
        TableEvent::StatusUpdate {
            table_id: 2,
            status: TableStatus::Served,
        }
    );

    server.await.unwrap();
}

#[tokio::test]
async fn invalid_frames_are_skipped_not_fatal() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap().to_string();
    let (ready_tx, ready_rx) = oneshot::channel::<()>();

    let server = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        ready_rx.await.unwrap();

        // Unknown kind byte with a well-formed length prefix
        let mut junk = vec![9u8];
        junk.extend_from_slice(&2u32.to_le_bytes());
        junk.extend_from_slice(b"{}");
        stream.write_all(&junk).await.unwrap();

        // Known kind, unparsable payload
        let mut bad_json = vec![0u8];
        bad_json.extend_from_slice(&3u32.to_le_bytes());
        bad_json.extend_from_slice(b"???");
        stream.write_all(&bad_json).await.unwrap();

        // A good frame must still come through afterwards
        stream
            .write_all(&encode_frame(&PushMessage::new_order(&NewOrderPayload {
                table_id: 7,
                confirmed: true,
            })))
            .await
            .unwrap();
    });

    let client = PushClient::connect(&addr, ReconnectPolicy::disabled())
        .await
        .unwrap();
    let mut events = client.subscribe();
    ready_tx.send(()).unwrap();

    assert_eq!(
        recv_event(&mut events).await,
        TableEvent::NewOrder {
            table_id: 7,
            confirmed: true,
        }
    );

    server.await.unwrap();
}

#[tokio::test]
async fn reconnects_after_drop_and_keeps_delivering() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap().to_string();
    let (ready_tx, ready_rx) = oneshot::channel::<()>();

    let server = tokio::spawn(async move {
        // First connection dies immediately
        let (stream, _) = listener.accept().await.unwrap();
        drop(stream);

        // Second connection serves an event
        let (mut stream, _) = listener.accept().await.unwrap();
        ready_rx.await.unwrap();
        stream
            .write_all(&encode_frame(&PushMessage::new_order(&NewOrderPayload {
                table_id: 3,
                confirmed: false,
            })))
            .await
            .unwrap();
    });

    let policy = ReconnectPolicy::new()
        .with_max_attempts(5)
        .with_delay(Duration::from_millis(10));
    let client = PushClient::connect(&addr, policy).await.unwrap();
    let mut events = client.subscribe();

    // The event can only arrive over the second connection, so receiving
    // it proves the reconnect happened.
    ready_tx.send(()).unwrap();
    assert_eq!(
        recv_event(&mut events).await,
        TableEvent::NewOrder {
            table_id: 3,
            confirmed: false,
        }
    );

    server.await.unwrap();
}

#[tokio::test]
async fn gives_up_after_bounded_attempts() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap().to_string();

    let policy = ReconnectPolicy::new()
        .with_max_attempts(2)
        .with_delay(Duration::from_millis(10));
    let client = PushClient::connect(&addr, policy).await.unwrap();

    // Kill the only connection and the listener with it
    let (stream, _) = listener.accept().await.unwrap();
    drop(stream);
    drop(listener);

    let mut status = client.status();
    tokio::time::timeout(
        Duration::from_secs(2),
        status.wait_for(|s| *s == ConnectionStatus::Disconnected),
    )
    .await
    .expect("never gave up reconnecting")
    .unwrap();
}

#[tokio::test]
async fn memory_channel_feeds_event_queue() {
    let (source_tx, _keep) = tokio::sync::broadcast::channel(16);
    let client = PushClient::memory(&source_tx);
    let mut queue = client.event_queue(16);

    source_tx
        .send(PushMessage::new_order(&NewOrderPayload {
            table_id: 4,
            confirmed: false,
        }))
        .unwrap();
    source_tx
        .send(PushMessage::table_status(&TableStatusPayload {
            table_id: 4,
            status: TableStatus::InProgress,
        }))
        .unwrap();

    let first = tokio::time::timeout(Duration::from_secs(2), queue.recv())
        .await
        .unwrap()
        .unwrap();
    let second = tokio::time::timeout(Duration::from_secs(2), queue.recv())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(
        first,
        TableEvent::NewOrder {
            table_id: 4,
            confirmed: false,
        }
    );
    assert_eq!(
        second,
        TableEvent::StatusUpdate {
            table_id: 4,
            status: TableStatus::InProgress,
        }
    );
}
