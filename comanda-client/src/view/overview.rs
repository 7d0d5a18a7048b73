//! Overview summary
//!
//! Pure rollups over already-fetched tables and orders; the admin
//! landing page renders these without extra endpoints.

use chrono::{DateTime, Datelike, Utc};
use std::collections::HashMap;

use shared::models::{Order, OrderStatus, Table, TableStatus};

/// Number of top-selling items reported
const TOP_ITEMS: usize = 5;

/// Admin dashboard rollup
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub tables_total: usize,
    pub tables_occupied: usize,
    /// Orders still moving through the floor lifecycle
    pub active_orders: usize,
    /// Orders waiting on the kitchen
    pub kitchen_queue: usize,
    /// Revenue of orders paid today (UTC)
    pub today_revenue: f64,
    /// Top-selling item names with quantities, highest first
    pub top_items: Vec<(String, i32)>,
}

impl DashboardSummary {
    pub fn compute(tables: &[Table], orders: &[Order], now: DateTime<Utc>) -> Self {
        let tables_occupied = tables
            .iter()
            .filter(|t| t.status != TableStatus::Available)
            .count();

        let active_orders = orders.iter().filter(|o| o.status.is_active()).count();
        let kitchen_queue = orders
            .iter()
            .filter(|o| o.status == OrderStatus::Unserved)
            .count();

        let today_revenue = orders
            .iter()
            .filter(|o| o.status == OrderStatus::Paid && same_day(o.created_at, now))
            .map(|o| o.total_amount)
            .sum();

        let mut quantities: HashMap<&str, i32> = HashMap::new();
        for order in orders {
            for item in &order.items {
                *quantities.entry(item.name.as_str()).or_insert(0) += item.quantity;
            }
        }
        let mut top_items: Vec<(String, i32)> = quantities
            .into_iter()
            .map(|(name, qty)| (name.to_string(), qty))
            .collect();
        top_items.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        top_items.truncate(TOP_ITEMS);

        Self {
            tables_total: tables.len(),
            tables_occupied,
            active_orders,
            kitchen_queue,
            today_revenue,
            top_items,
        }
    }
}

fn same_day(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    a.year() == b.year() && a.ordinal() == b.ordinal()
}
