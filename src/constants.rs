/// Constants module to avoid magic strings in the codebase

// Static backend data
pub const VALID_TOKEN: &str = "abc123TOKEN";
pub const VPN_CONFIG_PAYLOAD: &str = "client\nremote 1.2.3.4 1194\nproto udp\n...";
pub const VPN_STATUS_STATE: &str = "Connected";
pub const VPN_STATUS_NETWORK: &str = "10.8.0.2/24";

// Output
pub const DEFAULT_CONFIG_FILE: &str = "vpn-config.ovpn";

// UI Configuration
pub const DEFAULT_TITLE: &str = "VPN Portal";
pub const UI_REFRESH_INTERVAL_MS: u64 = 50;
pub const DEFAULT_MASK_CHAR: char = '*';

// User-facing messages
pub const MSG_TOKEN_PROMPT: &str = "Enter your registration token:";
pub const MSG_INVALID_TOKEN: &str = "Invalid token. Try again.";
pub const MSG_LOGIN_SUCCESS: &str = "Login successful!";
pub const MSG_WELCOME: &str = "Welcome! Select an option below:";
pub const LABEL_DOWNLOAD: &str = "Download Latest VPN File";
pub const LABEL_CHECK_STATUS: &str = "Check VPN Status / Network";

// Environment
pub const ENV_PREFIX: &str = "VPN_PORTAL_";
pub const APP_NAME: &str = "vpn-portal";
pub const LOG_FILE_NAME: &str = "vpn-portal.log";
