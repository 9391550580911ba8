use anyhow::Result;
use async_trait::async_trait;

use super::traits::{ConfigProvider, CredentialValidator, StatusProvider};
use super::types::VpnStatus;
use crate::constants::{VALID_TOKEN, VPN_CONFIG_PAYLOAD, VPN_STATUS_NETWORK, VPN_STATUS_STATE};

/// Backend that answers every request from built-in constants.
///
/// Stands in for the credential, configuration and telemetry services until
/// real ones exist. Every field can be overridden for tests or demos.
#[derive(Debug, Clone)]
pub struct StaticBackend {
    token: String,
    payload: String,
    status: VpnStatus,
}

impl Default for StaticBackend {
    fn default() -> Self {
        Self {
            token: VALID_TOKEN.to_string(),
            payload: VPN_CONFIG_PAYLOAD.to_string(),
            status: VpnStatus::new(VPN_STATUS_STATE, VPN_STATUS_NETWORK),
        }
    }
}

impl StaticBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    pub fn with_payload(mut self, payload: impl Into<String>) -> Self {
        self.payload = payload.into();
        self
    }

    pub fn with_status(mut self, status: VpnStatus) -> Self {
        self.status = status;
        self
    }
}

#[async_trait]
impl CredentialValidator for StaticBackend {
    async fn validate(&self, token: &str) -> Result<bool> {
        // Plain byte equality, no normalization
        Ok(token.as_bytes() == self.token.as_bytes())
    }
}

#[async_trait]
impl ConfigProvider for StaticBackend {
    async fn fetch_config(&self) -> Result<String> {
        Ok(self.payload.clone())
    }
}

#[async_trait]
impl StatusProvider for StaticBackend {
    async fn status(&self) -> Result<VpnStatus> {
        Ok(self.status.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_validate_exact_match_only() {
        let backend = StaticBackend::new();

        assert!(backend.validate("abc123TOKEN").await.unwrap());
        assert!(!backend.validate("wrong").await.unwrap());
        assert!(!backend.validate("").await.unwrap());
        assert!(!backend.validate("abc123token").await.unwrap());
        assert!(!backend.validate(" abc123TOKEN").await.unwrap());
        assert!(!backend.validate("abc123TOKEN\n").await.unwrap());
    }

    #[tokio::test]
    async fn test_default_payload_and_status() {
        let backend = StaticBackend::default();

        assert_eq!(
            backend.fetch_config().await.unwrap(),
            "client\nremote 1.2.3.4 1194\nproto udp\n..."
        );
        assert_eq!(
            backend.status().await.unwrap().to_string(),
            "VPN Status: Connected\nNetwork: 10.8.0.2/24"
        );
    }

    #[tokio::test]
    async fn test_overrides() {
        let backend = StaticBackend::new()
            .with_token("letmein")
            .with_payload("client\n")
            .with_status(VpnStatus::new("Connecting", "10.8.0.9/24"));

        assert!(backend.validate("letmein").await.unwrap());
        assert!(!backend.validate("abc123TOKEN").await.unwrap());
        assert_eq!(backend.fetch_config().await.unwrap(), "client\n");
        assert_eq!(backend.status().await.unwrap().state, "Connecting");
    }
}
