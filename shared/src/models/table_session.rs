//! Table Session Model

use serde::{Deserialize, Serialize};

use super::{Order, Table};

/// Server-tracked association between a table and an ordering token.
///
/// Ended explicitly by staff via `POST /sessions/end/{token}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSession {
    pub id: i64,
    pub token: String,
}

/// Response of `GET /tables/{id}/details`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableDetails {
    pub table: Table,
    #[serde(default)]
    pub session: Option<TableSession>,
    pub orders: Vec<Order>,
}
