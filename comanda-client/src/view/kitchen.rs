//! Kitchen board
//!
//! The kitchen works from orders, not tables: the roster is derived by
//! grouping the active orders (`unserved`/`served`) per table. New-order
//! notifications are tracked as a set of table ids and acknowledged by
//! opening the table.

use std::collections::{BTreeMap, HashSet};

use crate::api::{OrderApi, TableApi};
use crate::{ClientError, ClientResult};
use shared::message::TableEvent;
use shared::models::{Order, OrderStatus, TableStatus};

/// Per-table rollup of the kitchen's active orders
#[derive(Debug, Clone, PartialEq)]
pub struct KitchenTable {
    pub table_id: i64,
    pub table_number: String,
    pub has_unserved: bool,
    pub has_served: bool,
    pub has_new_order: bool,
}

/// Kitchen board view model
pub struct KitchenBoard<A> {
    api: A,
    /// Active orders across all tables
    orders: Vec<Order>,
    /// Tables with an unacknowledged new-order event
    notified: HashSet<i64>,
    selected: Option<i64>,
    /// Active orders of the selected table, oldest first
    table_orders: Vec<Order>,
    last_error: Option<ClientError>,
    detail_seq: u64,
}

impl<A: TableApi + OrderApi> KitchenBoard<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            orders: Vec::new(),
            notified: HashSet::new(),
            selected: None,
            table_orders: Vec::new(),
            last_error: None,
            detail_seq: 0,
        }
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn selected(&self) -> Option<i64> {
        self.selected
    }

    pub fn table_orders(&self) -> &[Order] {
        &self.table_orders
    }

    pub fn last_error(&self) -> Option<&ClientError> {
        self.last_error.as_ref()
    }

    pub fn is_notified(&self, table_id: i64) -> bool {
        self.notified.contains(&table_id)
    }

    /// Group the active orders into per-table rollups, ordered by table id
    pub fn tables(&self) -> Vec<KitchenTable> {
        let mut grouped: BTreeMap<i64, KitchenTable> = BTreeMap::new();

        for order in &self.orders {
            let entry = grouped.entry(order.table_id).or_insert_with(|| KitchenTable {
                table_id: order.table_id,
                table_number: order
                    .table_number
                    .clone()
                    .unwrap_or_else(|| order.table_id.to_string()),
                has_unserved: false,
                has_served: false,
                has_new_order: self.notified.contains(&order.table_id),
            });

            match order.status {
                OrderStatus::Unserved => entry.has_unserved = true,
                OrderStatus::Served => entry.has_served = true,
                _ => {}
            }
        }

        grouped.into_values().collect()
    }

    /// Reload the active orders; a transport failure keeps the previous list
    pub async fn refresh(&mut self) {
        match self.api.orders().await {
            Ok(orders) => {
                self.orders = orders
                    .into_iter()
                    .filter(|o| o.status.in_kitchen())
                    .collect();
            }
            Err(e) => {
                tracing::warn!("Kitchen order refresh failed, keeping previous list: {}", e);
            }
        }
    }

    /// Select a table, acknowledging its notification, and load its orders
    pub async fn select_table(&mut self, table_id: i64) {
        self.selected = Some(table_id);
        self.notified.remove(&table_id);
        self.fetch_table_orders(table_id, false).await;
    }

    pub fn deselect(&mut self) {
        self.selected = None;
        self.table_orders.clear();
        self.last_error = None;
    }

    /// Reconcile one push event into the board
    pub async fn handle_event(&mut self, event: TableEvent) {
        match event {
            TableEvent::NewOrder { table_id, .. } => {
                self.notified.insert(table_id);
                self.refresh().await;

                if self.selected == Some(table_id) {
                    // Merge instead of replace: in-flight rows keep their
                    // position on the ticket rail, new ones append.
                    self.fetch_table_orders(table_id, true).await;
                }
            }
            TableEvent::StatusUpdate { table_id, status } => {
                // Only food-lifecycle transitions concern the kitchen
                if !matches!(status, TableStatus::InProgress | TableStatus::Served) {
                    return;
                }

                self.refresh().await;
                if self.selected == Some(table_id) {
                    self.fetch_table_orders(table_id, false).await;
                }
            }
        }
    }

    /// Mark every unserved order of the selected table as served.
    ///
    /// Transitions are applied locally as soon as the backend accepts
    /// them, then the lists are reloaded for the authoritative state.
    pub async fn mark_all_served(&mut self) -> ClientResult<()> {
        let Some(table_id) = self.selected else {
            return Ok(());
        };

        let unserved: Vec<i64> = self
            .table_orders
            .iter()
            .filter(|o| o.status == OrderStatus::Unserved)
            .map(|o| o.id)
            .collect();

        for order_id in unserved {
            self.api.serve_order(order_id).await?;

            for order in self.orders.iter_mut().filter(|o| o.id == order_id) {
                order.status = OrderStatus::Served;
            }
            for order in self.table_orders.iter_mut().filter(|o| o.id == order_id) {
                order.status = OrderStatus::Served;
            }
        }

        self.refresh().await;
        self.fetch_table_orders(table_id, false).await;
        Ok(())
    }

    /// Fetch the selected table's active orders under the sequence guard.
    /// `merge` appends only orders with unseen ids; otherwise the list is
    /// replaced.
    async fn fetch_table_orders(&mut self, table_id: i64, merge: bool) {
        self.detail_seq += 1;
        let seq = self.detail_seq;

        let result = self.api.table_details(table_id).await;

        if seq != self.detail_seq || self.selected != Some(table_id) {
            tracing::debug!(table_id, seq, "Discarding stale kitchen detail response");
            return;
        }

        match result {
            Ok(details) => {
                let mut incoming: Vec<Order> = details
                    .orders
                    .into_iter()
                    .filter(|o| o.status.in_kitchen())
                    .collect();
                incoming.sort_by_key(|o| o.created_at);

                if merge {
                    let seen: HashSet<i64> = self.table_orders.iter().map(|o| o.id).collect();
                    self.table_orders
                        .extend(incoming.into_iter().filter(|o| !seen.contains(&o.id)));
                } else {
                    self.table_orders = incoming;
                }
                self.last_error = None;
            }
            Err(e) => {
                tracing::error!(table_id, "Failed to load kitchen table orders: {}", e);
                self.table_orders.clear();
                self.last_error = Some(e);
            }
        }
    }
}
