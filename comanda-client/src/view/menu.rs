//! Menu board
//!
//! Catalog CRUD over the backend; the local list is reconciled from the
//! backend's responses rather than refetched after every mutation.

use crate::api::MenuApi;
use crate::{ClientError, ClientResult};
use shared::models::{MenuItem, MenuItemCreate, MenuItemUpdate};

/// Menu board view model
pub struct MenuBoard<A> {
    api: A,
    items: Vec<MenuItem>,
    last_error: Option<ClientError>,
}

impl<A: MenuApi> MenuBoard<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            items: Vec::new(),
            last_error: None,
        }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn last_error(&self) -> Option<&ClientError> {
        self.last_error.as_ref()
    }

    /// Reload the catalog; a transport failure keeps the previous list
    pub async fn refresh(&mut self) {
        match self.api.menu().await {
            Ok(items) => {
                self.items = items;
                self.last_error = None;
            }
            Err(e) => {
                tracing::warn!("Menu refresh failed, keeping previous catalog: {}", e);
                self.last_error = Some(e);
            }
        }
    }

    /// Create a menu item and append the backend's row to the list
    pub async fn create(&mut self, payload: MenuItemCreate) -> ClientResult<()> {
        let created = self.api.create_menu_item(&payload).await?;
        self.items.push(created);
        Ok(())
    }

    /// Update a menu item and replace the local row with the backend's
    pub async fn update(&mut self, item_id: i64, payload: MenuItemUpdate) -> ClientResult<()> {
        let updated = self.api.update_menu_item(item_id, &payload).await?;

        match self.items.iter_mut().find(|i| i.id == item_id) {
            Some(item) => *item = updated,
            None => self.items.push(updated),
        }
        Ok(())
    }

    /// Delete a menu item and drop the local row
    pub async fn delete(&mut self, item_id: i64) -> ClientResult<()> {
        self.api.delete_menu_item(item_id).await?;
        self.items.retain(|i| i.id != item_id);
        Ok(())
    }
}
