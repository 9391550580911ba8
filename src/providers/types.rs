use std::fmt;

/// Snapshot of the VPN connection as reported by a status backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VpnStatus {
    /// Connection state label (e.g. "Connected")
    pub state: String,
    /// Address and prefix assigned inside the tunnel
    pub network: String,
}

impl VpnStatus {
    pub fn new(state: impl Into<String>, network: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            network: network.into(),
        }
    }
}

impl fmt::Display for VpnStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VPN Status: {}\nNetwork: {}", self.state, self.network)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_status_display_is_two_lines() {
        let status = VpnStatus::new("Disconnected", "-");
        assert_eq!(status.to_string(), "VPN Status: Disconnected\nNetwork: -");
        assert_eq!(status.to_string().lines().count(), 2);
    }
}
