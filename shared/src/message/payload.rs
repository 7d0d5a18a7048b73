use serde::{Deserialize, Serialize};

use crate::models::TableStatus;

/// `newOrder` payload (backend -> dashboard)
///
/// Emitted when a guest places an order at a table. `confirmed` reflects
/// whether a cashier has already acknowledged it server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrderPayload {
    pub table_id: i64,
    #[serde(default)]
    pub confirmed: bool,
}

/// `tableStatusUpdate` payload (backend -> dashboard)
///
/// Emitted when a table's lifecycle status changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableStatusPayload {
    pub table_id: i64,
    pub status: TableStatus,
}
