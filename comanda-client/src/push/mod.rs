//! Push channel - server-originated events over a persistent connection
//!
//! One-way: the backend notifies, the dashboard re-fetches over REST.
//! A dropped connection is retried a bounded number of times at a fixed
//! delay; events missed while disconnected are not replayed, the next
//! manual or selection-triggered fetch covers the gap.

mod client;
mod transport;

pub use client::PushClient;
pub use transport::{encode_frame, MemoryTransport, TcpTransport, Transport};

use std::time::Duration;
use thiserror::Error;

/// Push channel error type
#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid message: {0}")]
    InvalidMessage(String),

    #[error("Channel closed")]
    Closed,
}

/// Reconnection policy: fixed attempt count, fixed delay.
///
/// Deliberately no exponential backoff; the dashboard sits on the same
/// LAN as the backend and either reconnects quickly or gives up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconnectPolicy {
    /// Reconnect attempts before giving up
    pub max_attempts: u32,
    /// Delay before each attempt
    pub delay: Duration,
}

impl Default for ReconnectPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            delay: Duration::from_millis(2000),
        }
    }
}

impl ReconnectPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of reconnect attempts
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Set the delay before each attempt
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// A policy that never reconnects
    pub fn disabled() -> Self {
        Self::default().with_max_attempts(0)
    }
}

/// Connection status reported by the push client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    Connected,
    Reconnecting { attempt: u32 },
    Disconnected,
}
