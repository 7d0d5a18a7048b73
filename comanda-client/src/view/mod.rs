//! Synchronization view models
//!
//! Each board owns the in-memory state behind one dashboard view and
//! reconciles it against REST fetches and push events. All mutation
//! happens on the task driving the board; the only concurrency hazard,
//! overlapping detail fetches, is resolved by the fetch sequence guard.

pub mod kitchen;
pub mod menu;
pub mod overview;
pub mod receipt;
pub mod tables;

pub use kitchen::{KitchenBoard, KitchenTable};
pub use menu::MenuBoard;
pub use overview::DashboardSummary;
pub use receipt::Receipt;
pub use tables::{DetailOrder, TableBoard, TableDetail, TableEntry};
