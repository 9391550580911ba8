use crate::app::UIConfig;
use crate::constants::{LABEL_CHECK_STATUS, LABEL_DOWNLOAD};
use crate::portal::{Portal, SessionState, View};
use crate::utils::log_warn;

/// Buttons on the authenticated panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortalAction {
    DownloadConfig,
    CheckStatus,
}

impl PortalAction {
    pub const ALL: [PortalAction; 2] = [PortalAction::DownloadConfig, PortalAction::CheckStatus];

    pub fn label(&self) -> &'static str {
        match self {
            Self::DownloadConfig => LABEL_DOWNLOAD,
            Self::CheckStatus => LABEL_CHECK_STATUS,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::DownloadConfig => Self::CheckStatus,
            Self::CheckStatus => Self::DownloadConfig,
        }
    }

    pub fn previous(&self) -> Self {
        // Only two buttons, so stepping back is the same as stepping forward
        self.next()
    }
}

/// Application state
pub struct App {
    /// Login gate and actions
    pub portal: Portal,
    /// Token typed so far
    pub input: String,
    /// Is the app running?
    pub running: bool,
    /// Highlighted button on the authenticated panel
    pub selected_action: PortalAction,
    /// Title for the header
    pub title: String,
    /// Character drawn for each typed token character
    pub mask_char: char,
}

impl App {
    /// Create a new app instance
    pub fn new(portal: Portal, ui: &UIConfig) -> Self {
        Self {
            portal,
            input: String::new(),
            running: true,
            selected_action: PortalAction::DownloadConfig,
            title: ui.title.clone(),
            mask_char: ui.mask_char,
        }
    }

    pub fn view(&self) -> View {
        self.portal.view()
    }

    /// The token as it should appear on screen
    pub fn masked_input(&self) -> String {
        std::iter::repeat(self.mask_char)
            .take(self.input.chars().count())
            .collect()
    }

    /// Submit the typed token; the buffer is cleared once it is accepted
    pub async fn submit_login(&mut self) {
        if self.portal.submit_token(&self.input).await == SessionState::Authenticated {
            self.input.clear();
        }
    }

    /// Run one of the authenticated actions and report whether it succeeded.
    ///
    /// Outcomes, including failures, land in the portal's status text.
    pub async fn run_action(&mut self, action: PortalAction) -> bool {
        self.selected_action = action;
        let result = match action {
            PortalAction::DownloadConfig => self.portal.download_config().await.map(|_| ()),
            PortalAction::CheckStatus => self.portal.check_status().await.map(|_| ()),
        };

        match result {
            Ok(()) => true,
            Err(e) => {
                log_warn("⚠️", format!("{} failed: {}", action.label(), e));
                false
            }
        }
    }

    pub fn select_next(&mut self) {
        self.selected_action = self.selected_action.next();
    }

    pub fn select_previous(&mut self) {
        self.selected_action = self.selected_action.previous();
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn app_at(path: impl Into<std::path::PathBuf>) -> App {
        App::new(Portal::with_static_backend(path), &UIConfig::default())
    }

    #[test]
    fn test_masked_input_counts_chars() {
        let mut app = app_at("vpn-config.ovpn");
        app.input = "abé1".to_string();
        assert_eq!(app.masked_input(), "****");
    }

    #[tokio::test]
    async fn test_failed_login_keeps_input() {
        let mut app = app_at("vpn-config.ovpn");
        app.input = "wrong".to_string();

        app.submit_login().await;

        assert_eq!(app.view(), View::Login);
        assert_eq!(app.input, "wrong");
        assert_eq!(app.portal.feedback(), Some("Invalid token. Try again."));
    }

    #[tokio::test]
    async fn test_successful_login_clears_input() {
        let mut app = app_at("vpn-config.ovpn");
        app.input = "abc123TOKEN".to_string();

        app.submit_login().await;

        assert_eq!(app.view(), View::Main);
        assert!(app.input.is_empty());
    }

    #[tokio::test]
    async fn test_run_action_updates_selection_and_status() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = app_at(temp_dir.path().join("vpn-config.ovpn"));
        app.input = "abc123TOKEN".to_string();
        app.submit_login().await;

        assert!(app.run_action(PortalAction::CheckStatus).await);
        assert_eq!(app.selected_action, PortalAction::CheckStatus);
        assert_eq!(
            app.portal.status_text(),
            Some("VPN Status: Connected\nNetwork: 10.8.0.2/24")
        );

        assert!(app.run_action(PortalAction::DownloadConfig).await);
        assert_eq!(app.selected_action, PortalAction::DownloadConfig);
        assert!(app.portal.status_text().unwrap().starts_with("VPN file downloaded as"));
    }

    #[tokio::test]
    async fn test_run_action_reports_failure() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = app_at(temp_dir.path().join("missing").join("vpn-config.ovpn"));

        // Before login the action is refused
        assert!(!app.run_action(PortalAction::CheckStatus).await);
        assert_eq!(app.portal.status_text(), None);

        app.input = "abc123TOKEN".to_string();
        app.submit_login().await;

        assert!(!app.run_action(PortalAction::DownloadConfig).await);
        assert!(app.portal.status_text().unwrap().starts_with("Failed to write"));
        assert!(app.running);
    }

    #[test]
    fn test_selection_wraps() {
        let mut app = app_at("vpn-config.ovpn");
        app.select_next();
        assert_eq!(app.selected_action, PortalAction::CheckStatus);
        app.select_next();
        assert_eq!(app.selected_action, PortalAction::DownloadConfig);
        app.select_previous();
        assert_eq!(app.selected_action, PortalAction::CheckStatus);
    }
}
