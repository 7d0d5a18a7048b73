//! Data models
//!
//! Mirrors of the backend's REST payloads. All IDs are `i64`,
//! timestamps are UTC.

pub mod menu_item;
pub mod order;
pub mod table;
pub mod table_session;

// Re-exports
pub use menu_item::*;
pub use order::*;
pub use table::*;
pub use table_session::*;
