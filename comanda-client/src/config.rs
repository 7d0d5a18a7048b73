//! Client configuration

use crate::push::ReconnectPolicy;

/// Client configuration for connecting to the restaurant backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// REST base URL (e.g., "http://localhost:5000")
    pub base_url: String,

    /// Bearer token for authenticated requests
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Push channel address (host:port), if a live channel is wanted
    pub push_addr: Option<String>,

    /// Push channel reconnection policy
    pub reconnect: ReconnectPolicy,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: 30,
            push_addr: None,
            reconnect: ReconnectPolicy::default(),
        }
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the push channel address
    pub fn with_push_addr(mut self, addr: impl Into<String>) -> Self {
        self.push_addr = Some(addr.into());
        self
    }

    /// Set the push channel reconnection policy
    pub fn with_reconnect(mut self, policy: ReconnectPolicy) -> Self {
        self.reconnect = policy;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> super::HttpClient {
        super::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:5000")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_config_builder() {
        let config = ClientConfig::new("http://localhost:5000")
            .with_token("jwt")
            .with_timeout(5)
            .with_push_addr("localhost:5001");

        assert_eq!(config.timeout, 5);
        assert_eq!(config.token.as_deref(), Some("jwt"));
        assert_eq!(config.push_addr.as_deref(), Some("localhost:5001"));
        assert_eq!(config.reconnect.max_attempts, 5);
        assert_eq!(config.reconnect.delay, Duration::from_secs(2));
    }
}
