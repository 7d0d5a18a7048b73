use tokio::sync::{broadcast, mpsc, watch};

use crate::push::transport::{MemoryTransport, TcpTransport, Transport};
use crate::push::{ChannelError, ConnectionStatus, ReconnectPolicy};
use shared::message::{PushMessage, TableEvent};

/// Push Client
///
/// Owns a background task that reads frames off the transport, decodes
/// them into [`TableEvent`]s and fans them out to subscribers. A TCP
/// channel is resurrected per its [`ReconnectPolicy`] after a read
/// failure; a memory channel ends when its source closes.
#[derive(Debug)]
pub struct PushClient {
    event_tx: broadcast::Sender<TableEvent>,
    status_rx: watch::Receiver<ConnectionStatus>,
}

impl PushClient {
    /// Connect to the push channel over TCP.
    ///
    /// The initial connect must succeed; only later drops go through the
    /// reconnection policy.
    pub async fn connect(addr: &str, policy: ReconnectPolicy) -> Result<Self, ChannelError> {
        let transport = TcpTransport::connect(addr).await?;
        Ok(Self::spawn(
            Box::new(transport),
            Some((addr.to_string(), policy)),
        ))
    }

    /// Create an in-process client fed from a broadcast sender (tests)
    pub fn memory(source_tx: &broadcast::Sender<PushMessage>) -> Self {
        let transport = MemoryTransport::new(source_tx);
        Self::spawn(Box::new(transport), None)
    }

    fn spawn(
        mut transport: Box<dyn Transport>,
        reconnect: Option<(String, ReconnectPolicy)>,
    ) -> Self {
        let (event_tx, _) = broadcast::channel(1024);
        let (status_tx, status_rx) = watch::channel(ConnectionStatus::Connected);

        let tx = event_tx.clone();
        tokio::spawn(async move {
            loop {
                match transport.read_message().await {
                    Ok(msg) => match msg.to_event() {
                        Ok(event) => {
                            if let Err(e) = tx.send(event) {
                                tracing::debug!("No subscribers for push event: {}", e);
                            }
                        }
                        Err(e) => tracing::warn!("Dropping undecodable push payload: {}", e),
                    },
                    Err(ChannelError::InvalidMessage(m)) => {
                        // Frame already consumed; the stream stays aligned.
                        tracing::warn!("Skipping invalid push frame: {}", m);
                    }
                    Err(e) => {
                        tracing::error!("Push channel read error: {}", e);

                        let Some((addr, policy)) = reconnect.as_ref() else {
                            let _ = status_tx.send(ConnectionStatus::Disconnected);
                            break;
                        };

                        match reconnect_with(addr, policy, &status_tx).await {
                            Some(t) => {
                                transport = Box::new(t);
                                let _ = status_tx.send(ConnectionStatus::Connected);
                                tracing::info!("Push channel reconnected");
                            }
                            None => {
                                let _ = status_tx.send(ConnectionStatus::Disconnected);
                                tracing::error!(
                                    "Push channel gave up after {} reconnect attempts",
                                    policy.max_attempts
                                );
                                break;
                            }
                        }
                    }
                }
            }
        });

        Self {
            event_tx,
            status_rx,
        }
    }

    /// Subscribe to decoded push events
    pub fn subscribe(&self) -> broadcast::Receiver<TableEvent> {
        self.event_tx.subscribe()
    }

    /// Watch the connection status
    pub fn status(&self) -> watch::Receiver<ConnectionStatus> {
        self.status_rx.clone()
    }

    /// Bridge events into a bounded queue, preserving arrival order.
    ///
    /// This is the sink the reconciler pumps; backpressure applies to the
    /// bridge task, not to the transport read loop.
    pub fn event_queue(&self, capacity: usize) -> mpsc::Receiver<TableEvent> {
        let (queue_tx, queue_rx) = mpsc::channel(capacity);
        let mut events = self.subscribe();

        tokio::spawn(async move {
            loop {
                match events.recv().await {
                    Ok(event) => {
                        if queue_tx.send(event).await.is_err() {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        tracing::warn!("Event queue lagged, {} push events dropped", n);
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        });

        queue_rx
    }
}

/// Bounded reconnection: fixed delay before each attempt, then give up.
async fn reconnect_with(
    addr: &str,
    policy: &ReconnectPolicy,
    status_tx: &watch::Sender<ConnectionStatus>,
) -> Option<TcpTransport> {
    let mut attempt = 0u32;

    while attempt < policy.max_attempts {
        attempt += 1;
        let _ = status_tx.send(ConnectionStatus::Reconnecting { attempt });
        tokio::time::sleep(policy.delay).await;

        match TcpTransport::connect(addr).await {
            Ok(transport) => return Some(transport),
            Err(e) => tracing::warn!(
                "Reconnect attempt {}/{} failed: {}",
                attempt,
                policy.max_attempts,
                e
            ),
        }
    }

    None
}
