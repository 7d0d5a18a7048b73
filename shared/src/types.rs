//! Common types for the shared crate

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Timestamp type (Unix milliseconds)
pub type Timestamp = i64;

/// Error returned when parsing an unrecognized role string
#[derive(Debug, Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

/// Operator role, as issued by the backend at login.
///
/// The client does not enforce authorization; the role only selects which
/// dashboard view the operator lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Cashier,
    Kitchen,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Cashier => "cashier",
            Self::Kitchen => "kitchen",
        }
    }

    /// Route the operator is sent to after login
    pub fn landing_route(&self) -> &'static str {
        match self {
            Self::Admin => "/admin",
            Self::Cashier => "/cashier",
            Self::Kitchen => "/kitchen",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "cashier" => Ok(Self::Cashier),
            "kitchen" => Ok(Self::Kitchen),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}
