//! Push-channel message types
//!
//! Shared between the dashboard client and whatever delivers its push
//! events, for both in-process (memory) and network (TCP) channels.
//! The channel is one-way: the backend notifies, the client re-fetches.

use serde::de::DeserializeOwned;
use std::fmt;

pub mod payload;
pub use payload::*;

use crate::models::TableStatus;

/// Push event kinds carried on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A new order was placed at a table
    NewOrder = 0,
    /// A table's status changed
    TableStatusUpdate = 1,
}

impl TryFrom<u8> for EventKind {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(EventKind::NewOrder),
            1 => Ok(EventKind::TableStatusUpdate),
            _ => Err(()),
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::NewOrder => write!(f, "newOrder"),
            EventKind::TableStatusUpdate => write!(f, "tableStatusUpdate"),
        }
    }
}

/// Wire envelope: a kind tag plus a JSON payload
#[derive(Debug, Clone, PartialEq)]
pub struct PushMessage {
    pub kind: EventKind,
    pub payload: Vec<u8>,
}

impl PushMessage {
    pub fn new(kind: EventKind, payload: Vec<u8>) -> Self {
        Self { kind, payload }
    }

    /// Create a `newOrder` message
    pub fn new_order(payload: &NewOrderPayload) -> Self {
        Self::new(
            EventKind::NewOrder,
            serde_json::to_vec(payload).expect("Failed to serialize newOrder payload"),
        )
    }

    /// Create a `tableStatusUpdate` message
    pub fn table_status(payload: &TableStatusPayload) -> Self {
        Self::new(
            EventKind::TableStatusUpdate,
            serde_json::to_vec(payload).expect("Failed to serialize tableStatusUpdate payload"),
        )
    }

    /// Parse the payload as the given type
    pub fn parse_payload<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.payload)
    }

    /// Decode into the typed event the reconciler consumes
    pub fn to_event(&self) -> Result<TableEvent, serde_json::Error> {
        match self.kind {
            EventKind::NewOrder => {
                let p: NewOrderPayload = self.parse_payload()?;
                Ok(TableEvent::NewOrder {
                    table_id: p.table_id,
                    confirmed: p.confirmed,
                })
            }
            EventKind::TableStatusUpdate => {
                let p: TableStatusPayload = self.parse_payload()?;
                Ok(TableEvent::StatusUpdate {
                    table_id: p.table_id,
                    status: p.status,
                })
            }
        }
    }
}

/// Typed push event, the unit the reconcilers consume from their queue
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TableEvent {
    NewOrder { table_id: i64, confirmed: bool },
    StatusUpdate { table_id: i64, status: TableStatus },
}

impl TableEvent {
    /// The table the event targets
    pub fn table_id(&self) -> i64 {
        match self {
            Self::NewOrder { table_id, .. } => *table_id,
            Self::StatusUpdate { table_id, .. } => *table_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_kind_round_trip() {
        for kind in [EventKind::NewOrder, EventKind::TableStatusUpdate] {
            assert_eq!(EventKind::try_from(kind as u8).unwrap(), kind);
        }
        assert!(EventKind::try_from(7).is_err());
    }

    #[test]
    fn test_new_order_message() {
        let msg = PushMessage::new_order(&NewOrderPayload {
            table_id: 4,
            confirmed: true,
        });
        assert_eq!(msg.kind, EventKind::NewOrder);

        let event = msg.to_event().unwrap();
        assert_eq!(
            event,
            TableEvent::NewOrder {
                table_id: 4,
                confirmed: true,
            }
        );
    }

    #[test]
    fn test_table_status_message() {
        let msg = PushMessage::table_status(&TableStatusPayload {
            table_id: 2,
            status: TableStatus::Served,
        });

        let event = msg.to_event().unwrap();
        assert_eq!(event.table_id(), 2);
        assert_eq!(
            event,
            TableEvent::StatusUpdate {
                table_id: 2,
                status: TableStatus::Served,
            }
        );
    }

    #[test]
    fn test_malformed_payload_rejected() {
        let msg = PushMessage::new(EventKind::NewOrder, b"not json".to_vec());
        assert!(msg.to_event().is_err());
    }

    #[test]
    fn test_confirmed_defaults_false() {
        let msg = PushMessage::new(EventKind::NewOrder, br#"{"table_id":9}"#.to_vec());
        assert_eq!(
            msg.to_event().unwrap(),
            TableEvent::NewOrder {
                table_id: 9,
                confirmed: false,
            }
        );
    }
}
