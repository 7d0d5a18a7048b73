//! Shared types for the comanda dashboard
//!
//! Wire models and push-channel message types used by the client crates.
//! These mirror the backend's REST and push contracts; no I/O lives here.

pub mod client;
pub mod message;
pub mod models;
pub mod types;

// Re-exports
pub use serde::{Deserialize, Serialize};

// Push message re-exports (for convenient access)
pub use message::{EventKind, PushMessage, TableEvent};
pub use types::Role;
