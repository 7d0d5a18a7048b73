//! Menu Item Model

use serde::{Deserialize, Serialize};

/// Stock status, derived from the remaining quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    InStock,
    OutOfStock,
}

impl StockStatus {
    /// A menu item is in stock while any quantity remains
    pub fn from_quantity(quantity: i32) -> Self {
        if quantity > 0 {
            Self::InStock
        } else {
            Self::OutOfStock
        }
    }
}

/// Menu item entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Price in currency unit
    pub price: f64,
    pub stocks: i32,
    pub status: StockStatus,
}

/// Create menu item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stocks: i32,
    pub status: StockStatus,
}

impl MenuItemCreate {
    /// Build a create payload, deriving the stock status from the quantity
    pub fn new(name: impl Into<String>, description: Option<String>, price: f64, stocks: i32) -> Self {
        Self {
            name: name.into(),
            description,
            price,
            stocks,
            status: StockStatus::from_quantity(stocks),
        }
    }
}

/// Update menu item payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stocks: Option<i32>,
    pub status: Option<StockStatus>,
}

impl MenuItemUpdate {
    /// Set the stock quantity, re-deriving the status alongside it
    pub fn with_stocks(mut self, stocks: i32) -> Self {
        self.stocks = Some(stocks);
        self.status = Some(StockStatus::from_quantity(stocks));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_status_derivation() {
        assert_eq!(StockStatus::from_quantity(0), StockStatus::OutOfStock);
        assert_eq!(StockStatus::from_quantity(5), StockStatus::InStock);
        assert_eq!(StockStatus::from_quantity(-1), StockStatus::OutOfStock);
    }

    #[test]
    fn test_create_payload_derives_status() {
        let payload = MenuItemCreate::new("Halo-halo", None, 95.0, 0);
        assert_eq!(payload.status, StockStatus::OutOfStock);

        let payload = MenuItemCreate::new("Halo-halo", None, 95.0, 12);
        assert_eq!(payload.status, StockStatus::InStock);
    }

    #[test]
    fn test_update_payload_rederives_status() {
        let payload = MenuItemUpdate::default().with_stocks(0);
        assert_eq!(payload.status, Some(StockStatus::OutOfStock));
    }
}
