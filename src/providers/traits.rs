use anyhow::Result;
use async_trait::async_trait;

use super::types::VpnStatus;

/// Decides whether a registration token grants access to the portal
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialValidator: Send + Sync {
    /// Returns `Ok(true)` when the token is accepted
    async fn validate(&self, token: &str) -> Result<bool>;
}

/// Source of the VPN client configuration handed out after login
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConfigProvider: Send + Sync {
    /// Fetch the latest client configuration as text
    async fn fetch_config(&self) -> Result<String>;
}

/// Source of the connection state and network shown in the portal
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatusProvider: Send + Sync {
    async fn status(&self) -> Result<VpnStatus>;
}
