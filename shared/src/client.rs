//! Client-related types shared with the backend
//!
//! Request/response types used in API communication. The login response
//! shape varies between backend versions: the role is either a top-level
//! field or nested inside a `user` object, so both are accepted.

use serde::{Deserialize, Serialize};

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// User information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub role: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub user: Option<UserInfo>,
}

impl LoginResponse {
    /// Resolve the operator role, wherever the backend put it
    pub fn role(&self) -> Option<&str> {
        self.role
            .as_deref()
            .or_else(|| self.user.as_ref().map(|u| u.role.as_str()))
    }
}

/// Error body the backend attaches to failed requests
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_top_level_role() {
        let resp: LoginResponse =
            serde_json::from_str(r#"{"token":"t1","role":"cashier"}"#).unwrap();
        assert_eq!(resp.role(), Some("cashier"));
    }

    #[test]
    fn test_login_response_nested_role() {
        let resp: LoginResponse = serde_json::from_str(
            r#"{"token":"t1","user":{"id":"7","username":"kc","role":"kitchen"}}"#,
        )
        .unwrap();
        assert_eq!(resp.role(), Some("kitchen"));
    }

    #[test]
    fn test_login_response_missing_role() {
        let resp: LoginResponse = serde_json::from_str(r#"{"token":"t1"}"#).unwrap();
        assert!(resp.role().is_none());
    }
}
