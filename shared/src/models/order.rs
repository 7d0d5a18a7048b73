//! Order Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Unserved,
    Served,
    Paid,
    InProgress,
}

impl OrderStatus {
    /// Orders still moving through the floor lifecycle
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Pending | Self::Unserved | Self::InProgress)
    }

    /// Orders the kitchen board displays
    pub fn in_kitchen(&self) -> bool {
        matches!(self, Self::Unserved | Self::Served)
    }
}

/// Order line item, a denormalized copy of the menu item at order time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,
    pub quantity: i32,
    /// Unit price in currency unit
    pub price: f64,
}

impl OrderItem {
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub table_id: i64,
    #[serde(default)]
    pub table_number: Option<String>,
    pub status: OrderStatus,
    /// Total amount in currency unit
    pub total_amount: f64,
    #[serde(default)]
    pub payment_status: Option<String>,
    #[serde(default)]
    pub payment_method: Option<String>,
    pub created_at: DateTime<Utc>,
    pub items: Vec<OrderItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert!(OrderStatus::Pending.is_active());
        assert!(OrderStatus::Unserved.is_active());
        assert!(!OrderStatus::Paid.is_active());
        assert!(OrderStatus::Unserved.in_kitchen());
        assert!(OrderStatus::Served.in_kitchen());
        assert!(!OrderStatus::Pending.in_kitchen());
    }

    #[test]
    fn test_line_total() {
        let item = OrderItem {
            name: "Sisig".to_string(),
            quantity: 3,
            price: 120.0,
        };
        assert_eq!(item.line_total(), 360.0);
    }
}
