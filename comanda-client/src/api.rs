//! API facade traits
//!
//! The view models are generic over these instead of holding an
//! `HttpClient` directly, so tests can drive them with scripted
//! responses and production code plugs the real client in.

use async_trait::async_trait;

use crate::{ClientResult, HttpClient};
use shared::models::{MenuItem, MenuItemCreate, MenuItemUpdate, Order, Table, TableDetails};

/// Table roster and detail endpoints
#[async_trait]
pub trait TableApi: Send + Sync {
    async fn tables(&self) -> ClientResult<Vec<Table>>;
    async fn table_details(&self, table_id: i64) -> ClientResult<TableDetails>;
    async fn end_session(&self, token: &str) -> ClientResult<()>;
}

/// Order listing and status transitions
#[async_trait]
pub trait OrderApi: Send + Sync {
    async fn orders(&self) -> ClientResult<Vec<Order>>;
    async fn orders_with(&self, limit: u32, sort: &str) -> ClientResult<Vec<Order>>;
    async fn serve_order(&self, order_id: i64) -> ClientResult<()>;
    async fn pay_order(&self, order_id: i64) -> ClientResult<()>;
    async fn confirm_order(&self, order_id: i64) -> ClientResult<()>;
}

/// Menu catalog CRUD
#[async_trait]
pub trait MenuApi: Send + Sync {
    async fn menu(&self) -> ClientResult<Vec<MenuItem>>;
    async fn create_menu_item(&self, payload: &MenuItemCreate) -> ClientResult<MenuItem>;
    async fn update_menu_item(
        &self,
        item_id: i64,
        payload: &MenuItemUpdate,
    ) -> ClientResult<MenuItem>;
    async fn delete_menu_item(&self, item_id: i64) -> ClientResult<()>;
}

#[async_trait]
impl TableApi for HttpClient {
    async fn tables(&self) -> ClientResult<Vec<Table>> {
        HttpClient::tables(self).await
    }

    async fn table_details(&self, table_id: i64) -> ClientResult<TableDetails> {
        HttpClient::table_details(self, table_id).await
    }

    async fn end_session(&self, token: &str) -> ClientResult<()> {
        HttpClient::end_session(self, token).await
    }
}

#[async_trait]
impl OrderApi for HttpClient {
    async fn orders(&self) -> ClientResult<Vec<Order>> {
        HttpClient::orders(self).await
    }

    async fn orders_with(&self, limit: u32, sort: &str) -> ClientResult<Vec<Order>> {
        HttpClient::orders_with(self, limit, sort).await
    }

    async fn serve_order(&self, order_id: i64) -> ClientResult<()> {
        HttpClient::serve_order(self, order_id).await
    }

    async fn pay_order(&self, order_id: i64) -> ClientResult<()> {
        HttpClient::pay_order(self, order_id).await
    }

    async fn confirm_order(&self, order_id: i64) -> ClientResult<()> {
        HttpClient::confirm_order(self, order_id).await
    }
}

#[async_trait]
impl MenuApi for HttpClient {
    async fn menu(&self) -> ClientResult<Vec<MenuItem>> {
        HttpClient::menu(self).await
    }

    async fn create_menu_item(&self, payload: &MenuItemCreate) -> ClientResult<MenuItem> {
        HttpClient::create_menu_item(self, payload).await
    }

    async fn update_menu_item(
        &self,
        item_id: i64,
        payload: &MenuItemUpdate,
    ) -> ClientResult<MenuItem> {
        HttpClient::update_menu_item(self, item_id, payload).await
    }

    async fn delete_menu_item(&self, item_id: i64) -> ClientResult<()> {
        HttpClient::delete_menu_item(self, item_id).await
    }
}

// Shared-ownership passthroughs so a board and the surrounding app can
// hold the same API handle.
#[async_trait]
impl<T: TableApi> TableApi for std::sync::Arc<T> {
    async fn tables(&self) -> ClientResult<Vec<Table>> {
        (**self).tables().await
    }

    async fn table_details(&self, table_id: i64) -> ClientResult<TableDetails> {
        (**self).table_details(table_id).await
    }

    async fn end_session(&self, token: &str) -> ClientResult<()> {
        (**self).end_session(token).await
    }
}

#[async_trait]
impl<T: OrderApi> OrderApi for std::sync::Arc<T> {
    async fn orders(&self) -> ClientResult<Vec<Order>> {
        (**self).orders().await
    }

    async fn orders_with(&self, limit: u32, sort: &str) -> ClientResult<Vec<Order>> {
        (**self).orders_with(limit, sort).await
    }

    async fn serve_order(&self, order_id: i64) -> ClientResult<()> {
        (**self).serve_order(order_id).await
    }

    async fn pay_order(&self, order_id: i64) -> ClientResult<()> {
        (**self).pay_order(order_id).await
    }

    async fn confirm_order(&self, order_id: i64) -> ClientResult<()> {
        (**self).confirm_order(order_id).await
    }
}

#[async_trait]
impl<T: MenuApi> MenuApi for std::sync::Arc<T> {
    async fn menu(&self) -> ClientResult<Vec<MenuItem>> {
        (**self).menu().await
    }

    async fn create_menu_item(&self, payload: &MenuItemCreate) -> ClientResult<MenuItem> {
        (**self).create_menu_item(payload).await
    }

    async fn update_menu_item(
        &self,
        item_id: i64,
        payload: &MenuItemUpdate,
    ) -> ClientResult<MenuItem> {
        (**self).update_menu_item(item_id, payload).await
    }

    async fn delete_menu_item(&self, item_id: i64) -> ClientResult<()> {
        (**self).delete_menu_item(item_id).await
    }
}
