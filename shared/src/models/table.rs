//! Dining Table Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Table status, server-authoritative
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableStatus {
    Available,
    Occupied,
    InProgress,
    Served,
}

impl fmt::Display for TableStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => write!(f, "available"),
            Self::Occupied => write!(f, "occupied"),
            Self::InProgress => write!(f, "in_progress"),
            Self::Served => write!(f, "served"),
        }
    }
}

/// Dining table entity as returned by `GET /tables`.
///
/// The "has new order" notification flag is client-local and deliberately
/// not part of this payload; see the roster entry in the view layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    pub id: i64,
    pub table_number: String,
    pub status: TableStatus,
}
