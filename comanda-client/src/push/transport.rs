use async_trait::async_trait;
use std::sync::Arc;
use tokio::io::AsyncReadExt;
use tokio::net::tcp::OwnedReadHalf;
use tokio::net::TcpStream;
use tokio::sync::{broadcast, Mutex};

use crate::push::ChannelError;
use shared::message::{EventKind, PushMessage};

/// Transport abstraction for the push channel (read side only)
#[async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    async fn read_message(&self) -> Result<PushMessage, ChannelError>;
    async fn close(&self) -> Result<(), ChannelError>;
}

/// Frame layout: 1 kind byte, 4-byte LE payload length, JSON payload.
pub fn encode_frame(msg: &PushMessage) -> Vec<u8> {
    let mut data = Vec::with_capacity(5 + msg.payload.len());
    data.push(msg.kind as u8);
    data.extend_from_slice(&(msg.payload.len() as u32).to_le_bytes());
    data.extend_from_slice(&msg.payload);
    data
}

/// TCP Transport Implementation
#[derive(Debug, Clone)]
pub struct TcpTransport {
    reader: Arc<Mutex<OwnedReadHalf>>,
}

impl TcpTransport {
    pub async fn connect(addr: &str) -> Result<Self, ChannelError> {
        let stream = TcpStream::connect(addr)
            .await
            .map_err(|e| ChannelError::Connection(e.to_string()))?;
        let (reader, _writer) = stream.into_split();
        Ok(Self {
            reader: Arc::new(Mutex::new(reader)),
        })
    }
}

#[async_trait]
impl Transport for TcpTransport {
    async fn read_message(&self) -> Result<PushMessage, ChannelError> {
        let mut reader = self.reader.lock().await;

        // Read event kind (1 byte)
        let mut kind_buf = [0u8; 1];
        reader
            .read_exact(&mut kind_buf)
            .await
            .map_err(ChannelError::Io)?;

        // Read payload length (4 bytes)
        let mut len_buf = [0u8; 4];
        reader
            .read_exact(&mut len_buf)
            .await
            .map_err(ChannelError::Io)?;

        let len = u32::from_le_bytes(len_buf) as usize;

        // Read payload. Consumed before the kind byte is validated so an
        // unknown kind leaves the stream aligned on the next frame.
        let mut payload = vec![0u8; len];
        reader
            .read_exact(&mut payload)
            .await
            .map_err(ChannelError::Io)?;

        let kind = EventKind::try_from(kind_buf[0])
            .map_err(|_| ChannelError::InvalidMessage(format!("Unknown event kind {}", kind_buf[0])))?;

        Ok(PushMessage { kind, payload })
    }

    async fn close(&self) -> Result<(), ChannelError> {
        // Dropping the Arc references will eventually close the stream
        Ok(())
    }
}

/// Memory Transport Implementation (for in-process tests)
#[derive(Debug, Clone)]
pub struct MemoryTransport {
    rx: Arc<Mutex<broadcast::Receiver<PushMessage>>>,
}

impl MemoryTransport {
    /// Subscribe to an in-process event source
    pub fn new(source_tx: &broadcast::Sender<PushMessage>) -> Self {
        Self {
            rx: Arc::new(Mutex::new(source_tx.subscribe())),
        }
    }
}

#[async_trait]
impl Transport for MemoryTransport {
    async fn read_message(&self) -> Result<PushMessage, ChannelError> {
        let mut rx = self.rx.lock().await;
        rx.recv().await.map_err(|e| match e {
            broadcast::error::RecvError::Closed => ChannelError::Closed,
            broadcast::error::RecvError::Lagged(n) => {
                ChannelError::Connection(format!("Receiver lagged by {} messages", n))
            }
        })
    }

    async fn close(&self) -> Result<(), ChannelError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::message::NewOrderPayload;

    #[test]
    fn test_frame_layout() {
        let msg = PushMessage::new_order(&NewOrderPayload {
            table_id: 3,
            confirmed: false,
        });
        let frame = encode_frame(&msg);

        assert_eq!(frame[0], EventKind::NewOrder as u8);
        let len = u32::from_le_bytes([frame[1], frame[2], frame[3], frame[4]]) as usize;
        assert_eq!(len, msg.payload.len());
        assert_eq!(&frame[5..], &msg.payload[..]);
    }
}
