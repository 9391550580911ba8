use std::fs;
use std::path::PathBuf;

use super::session::Portal;
use crate::providers::VpnStatus;
use crate::utils::{log_error, log_info, PortalError};

impl Portal {
    /// Fetch the client configuration and write it to the output path.
    ///
    /// Any existing file is truncated. Failures are reported in the status
    /// text and returned; the session stays authenticated either way.
    pub async fn download_config(&mut self) -> Result<PathBuf, PortalError> {
        if !self.is_authenticated() {
            return Err(PortalError::NotAuthenticated);
        }

        let payload = match self.config_provider.fetch_config().await {
            Ok(payload) => payload,
            Err(e) => {
                log_error("❌", format!("Failed to fetch VPN configuration: {}", e));
                self.set_status(format!("Failed to fetch VPN configuration: {}", e));
                return Err(PortalError::Backend(e.to_string()));
            }
        };

        let path = self.output_path().to_path_buf();
        if let Err(source) = fs::write(&path, payload) {
            let err = PortalError::WriteFailed { path, source };
            log_error("❌", &err);
            self.set_status(err.to_string());
            return Err(err);
        }

        log_info("💾", format!("VPN configuration written to {}", path.display()));
        self.set_status(format!("VPN file downloaded as '{}'.", path.display()));
        Ok(path)
    }

    /// Query the status backend and show the result in the status text
    pub async fn check_status(&mut self) -> Result<VpnStatus, PortalError> {
        if !self.is_authenticated() {
            return Err(PortalError::NotAuthenticated);
        }

        match self.status_provider.status().await {
            Ok(status) => {
                log_info("📡", format!("VPN status: {}", status.state));
                self.set_status(status.to_string());
                Ok(status)
            }
            Err(e) => {
                log_error("❌", format!("Failed to query VPN status: {}", e));
                self.set_status(format!("Failed to query VPN status: {}", e));
                Err(PortalError::Backend(e.to_string()))
            }
        }
    }
}
