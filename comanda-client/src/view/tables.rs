//! Tables board
//!
//! Keeps the table roster and the selected table's order detail
//! consistent under push events and manual refreshes.
//!
//! Two rapid events for the same table issue overlapping detail fetches;
//! each fetch carries a sequence number and only the latest issued one
//! may land, so a slow earlier response can never overwrite a newer one.
//! The same guard discards responses for a table that is no longer
//! selected.

use tokio::sync::mpsc;

use crate::api::{OrderApi, TableApi};
use crate::{ClientError, ClientResult};
use shared::message::TableEvent;
use shared::models::{Order, Table, TableDetails, TableSession};

/// Roster entry: the server's table plus the client-local notification flag
#[derive(Debug, Clone)]
pub struct TableEntry {
    pub table: Table,
    /// Unacknowledged new-order push event for this table
    pub has_new_order: bool,
}

/// An order inside the detail view; every order after the first on a
/// table is an add-on to the main one.
#[derive(Debug, Clone)]
pub struct DetailOrder {
    pub order: Order,
    pub is_additional: bool,
}

/// Detail cache for the selected table
#[derive(Debug, Clone)]
pub struct TableDetail {
    pub session: Option<TableSession>,
    pub orders: Vec<DetailOrder>,
}

/// Tables board view model
pub struct TableBoard<A> {
    api: A,
    roster: Vec<TableEntry>,
    selected: Option<i64>,
    detail: Option<TableDetail>,
    last_error: Option<ClientError>,
    /// Latest issued detail-fetch sequence number
    detail_seq: u64,
}

impl<A: TableApi> TableBoard<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            roster: Vec::new(),
            selected: None,
            detail: None,
            last_error: None,
            detail_seq: 0,
        }
    }

    pub fn tables(&self) -> &[TableEntry] {
        &self.roster
    }

    pub fn selected(&self) -> Option<i64> {
        self.selected
    }

    pub fn detail(&self) -> Option<&TableDetail> {
        self.detail.as_ref()
    }

    /// Error from the most recent detail fetch, cleared by the next
    /// successful one
    pub fn last_error(&self) -> Option<&ClientError> {
        self.last_error.as_ref()
    }

    fn entry_mut(&mut self, table_id: i64) -> Option<&mut TableEntry> {
        self.roster.iter_mut().find(|e| e.table.id == table_id)
    }

    fn set_flag(&mut self, table_id: i64, value: bool) {
        if let Some(entry) = self.entry_mut(table_id) {
            entry.has_new_order = value;
        }
    }

    /// Reload the roster from the backend.
    ///
    /// Notification flags are client-local, so they are carried over from
    /// the outgoing roster. A transport failure keeps the previous roster:
    /// stale-but-available beats an empty screen.
    pub async fn refresh(&mut self) {
        match self.api.tables().await {
            Ok(mut tables) => {
                tables.sort_by_key(|t| numeric_table_number(&t.table_number));
                let previous = std::mem::take(&mut self.roster);
                self.roster = tables
                    .into_iter()
                    .map(|table| {
                        let has_new_order = previous
                            .iter()
                            .find(|e| e.table.id == table.id)
                            .map(|e| e.has_new_order)
                            .unwrap_or(false);
                        TableEntry {
                            table,
                            has_new_order,
                        }
                    })
                    .collect();
            }
            Err(e) => {
                tracing::warn!("Table refresh failed, keeping previous roster: {}", e);
            }
        }
    }

    /// Select a table and load its detail.
    ///
    /// Opening the table acknowledges its notification, so the flag is
    /// cleared before the fetch and stays cleared whatever the outcome.
    /// On fetch failure the detail cache is emptied and the error kept
    /// for display; the selection itself stays.
    pub async fn select_table(&mut self, table_id: i64) {
        self.selected = Some(table_id);
        self.set_flag(table_id, false);
        self.fetch_detail(table_id).await;
    }

    /// Drop the selection and its detail cache
    pub fn deselect(&mut self) {
        self.selected = None;
        self.detail = None;
        self.last_error = None;
    }

    /// Reconcile one push event into the board
    pub async fn handle_event(&mut self, event: TableEvent) {
        match event {
            TableEvent::NewOrder { table_id, .. } => {
                self.set_flag(table_id, true);
                self.refresh().await;
                // The refresh may have just brought this table into the
                // roster; the flag applies either way.
                self.set_flag(table_id, true);

                if self.selected == Some(table_id) {
                    self.fetch_detail(table_id).await;
                    // The operator is looking at this table right now
                    self.set_flag(table_id, false);
                }
            }
            TableEvent::StatusUpdate { table_id, status } => {
                if let Some(entry) = self.entry_mut(table_id) {
                    entry.table.status = status;
                }

                if self.selected == Some(table_id) {
                    self.fetch_detail(table_id).await;
                }
            }
        }
    }

    /// End the selected table's active session, then reload roster and detail
    pub async fn end_selected_session(&mut self) -> ClientResult<()> {
        let token = self
            .detail
            .as_ref()
            .and_then(|d| d.session.as_ref())
            .map(|s| s.token.clone())
            .ok_or_else(|| ClientError::NotFound("Active session for selected table".to_string()))?;

        self.api.end_session(&token).await?;

        self.refresh().await;
        if let Some(table_id) = self.selected {
            self.fetch_detail(table_id).await;
        }
        Ok(())
    }

    /// Issue a detail fetch sequence number. Exposed together with
    /// [`apply_detail`](Self::apply_detail) so overlapping fetches can be
    /// exercised deterministically.
    pub fn issue_fetch(&mut self) -> u64 {
        self.detail_seq += 1;
        self.detail_seq
    }

    /// Apply a detail response. Returns false when the response is stale:
    /// a newer fetch was issued since, or the selection moved to another
    /// table while this one was in flight.
    pub fn apply_detail(
        &mut self,
        table_id: i64,
        seq: u64,
        result: ClientResult<TableDetails>,
    ) -> bool {
        if seq != self.detail_seq || self.selected != Some(table_id) {
            tracing::debug!(table_id, seq, "Discarding stale table detail response");
            return false;
        }

        match result {
            Ok(details) => {
                self.detail = Some(TableDetail {
                    session: details.session,
                    orders: details
                        .orders
                        .into_iter()
                        .enumerate()
                        .map(|(idx, order)| DetailOrder {
                            order,
                            is_additional: idx > 0,
                        })
                        .collect(),
                });
                self.last_error = None;
            }
            Err(e) => {
                tracing::error!(table_id, "Failed to load table detail: {}", e);
                self.detail = None;
                self.last_error = Some(e);
            }
        }
        true
    }

    async fn fetch_detail(&mut self, table_id: i64) {
        let seq = self.issue_fetch();
        let result = self.api.table_details(table_id).await;
        self.apply_detail(table_id, seq, result);
    }
}

// Order transitions the cashier drives from the detail pane
impl<A: TableApi + OrderApi> TableBoard<A> {
    /// Confirm a pending order, then reload the selected table's detail
    pub async fn confirm_order(&mut self, order_id: i64) -> ClientResult<()> {
        self.api.confirm_order(order_id).await?;
        if let Some(table_id) = self.selected {
            self.fetch_detail(table_id).await;
        }
        Ok(())
    }

    /// Mark an order paid, then reload the selected table's detail
    pub async fn mark_order_paid(&mut self, order_id: i64) -> ClientResult<()> {
        self.api.pay_order(order_id).await?;
        if let Some(table_id) = self.selected {
            self.fetch_detail(table_id).await;
        }
        Ok(())
    }
}

/// Drain the event queue in arrival order.
///
/// One logical task owns the board; handlers run to completion between
/// queue reads, so state mutations are atomic with respect to renders.
pub async fn run<A: TableApi>(board: &mut TableBoard<A>, events: &mut mpsc::Receiver<TableEvent>) {
    while let Some(event) = events.recv().await {
        board.handle_event(event).await;
    }
}

/// Tables are displayed in numeric order; non-numeric labels sort last.
fn numeric_table_number(table_number: &str) -> (i64, String) {
    (
        table_number.parse::<i64>().unwrap_or(i64::MAX),
        table_number.to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_table_order() {
        let mut numbers = vec!["10", "2", "1", "patio"];
        numbers.sort_by_key(|n| numeric_table_number(n));
        assert_eq!(numbers, vec!["1", "2", "10", "patio"]);
    }
}
