//! Operator session store
//!
//! The session (token + role) is an explicit object with defined init
//! (login) and teardown (logout) boundaries, persisted so a restarted
//! dashboard resumes without re-authenticating. Replaces ambient
//! browser-storage style globals.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use shared::client::LoginResponse;
use shared::Role;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Login response carried no usable role")]
    MissingRole,

    #[error("Unknown role: {0}")]
    UnknownRole(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Operator session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub role: Role,
    pub email: String,
    /// Unix millis of the login that produced this session
    pub logged_in_at: i64,
}

impl Session {
    /// Build a session from a successful login response
    pub fn from_login(response: &LoginResponse, email: &str) -> Result<Self, SessionError> {
        let role = response.role().ok_or(SessionError::MissingRole)?;
        let role = role
            .parse::<Role>()
            .map_err(|e| SessionError::UnknownRole(e.0))?;

        Ok(Self {
            token: response.token.clone(),
            role,
            email: email.to_string(),
            logged_in_at: Utc::now().timestamp_millis(),
        })
    }
}

/// File-backed session store: `{data_dir}/session.json`
pub struct SessionStore {
    file_path: PathBuf,
}

impl SessionStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            file_path: data_dir.join("session.json"),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Persist the active session (called after login)
    pub fn save(&self, session: &Session) -> Result<(), SessionError> {
        if let Some(parent) = self.file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(session)?;
        std::fs::write(&self.file_path, content)?;
        tracing::debug!(email = %session.email, role = %session.role, "Session saved");
        Ok(())
    }

    /// Load the persisted session, if any.
    ///
    /// An unreadable or unparsable file is treated as no session; the
    /// operator logs in again rather than the dashboard failing to start.
    pub fn load(&self) -> Result<Option<Session>, SessionError> {
        if !self.file_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.file_path)?;
        match serde_json::from_str::<Session>(&content) {
            Ok(session) => {
                tracing::debug!(email = %session.email, "Loaded persisted session");
                Ok(Some(session))
            }
            Err(e) => {
                tracing::warn!("Discarding unparsable session file: {}", e);
                let _ = std::fs::remove_file(&self.file_path);
                Ok(None)
            }
        }
    }

    /// Remove the persisted session (called on logout)
    pub fn clear(&self) -> Result<(), SessionError> {
        if self.file_path.exists() {
            std::fs::remove_file(&self.file_path)?;
            tracing::debug!("Session cleared");
        }
        Ok(())
    }
}
