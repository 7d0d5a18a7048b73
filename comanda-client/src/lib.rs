//! Comanda Client - dashboard client for the restaurant backend
//!
//! Provides the REST client, the push-event channel, the operator session
//! store, and the synchronization view models that keep the floor and
//! kitchen dashboards consistent under server-originated events.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod push;
pub mod session;
pub mod view;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use push::{ChannelError, ConnectionStatus, PushClient, ReconnectPolicy};
pub use session::{Session, SessionStore};

// Re-export shared types for convenience
pub use shared::client::{LoginRequest, LoginResponse, UserInfo};
pub use shared::message::{EventKind, PushMessage, TableEvent};
pub use shared::Role;
