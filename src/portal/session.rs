use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::constants::{MSG_INVALID_TOKEN, MSG_LOGIN_SUCCESS};
use crate::providers::{ConfigProvider, CredentialValidator, StaticBackend, StatusProvider};
use crate::utils::{log_info, log_warn};

/// Whether the user has passed the token gate.
///
/// `Authenticated` is terminal: there is no logout, so once reached it holds
/// for the rest of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Unauthenticated,
    Authenticated,
}

/// The panel currently on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Login,
    Main,
}

/// Portal state shared by the login gate and the authenticated actions
pub struct Portal {
    session: SessionState,
    /// Message shown under the login form
    feedback: Option<String>,
    /// Message shown under the action buttons
    status_text: Option<String>,
    output_path: PathBuf,
    pub(super) validator: Arc<dyn CredentialValidator>,
    pub(super) config_provider: Arc<dyn ConfigProvider>,
    pub(super) status_provider: Arc<dyn StatusProvider>,
}

impl Portal {
    /// Create a portal backed by the given services
    pub fn new(
        validator: Arc<dyn CredentialValidator>,
        config_provider: Arc<dyn ConfigProvider>,
        status_provider: Arc<dyn StatusProvider>,
        output_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            session: SessionState::default(),
            feedback: None,
            status_text: None,
            output_path: output_path.into(),
            validator,
            config_provider,
            status_provider,
        }
    }

    /// Create a portal where one backend answers all three services
    pub fn with_backend<B>(backend: B, output_path: impl Into<PathBuf>) -> Self
    where
        B: CredentialValidator + ConfigProvider + StatusProvider + 'static,
    {
        let backend = Arc::new(backend);
        Self::new(backend.clone(), backend.clone(), backend, output_path)
    }

    /// Create a portal answering from the built-in constants
    pub fn with_static_backend(output_path: impl Into<PathBuf>) -> Self {
        Self::with_backend(StaticBackend::default(), output_path)
    }

    pub fn session(&self) -> SessionState {
        self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session == SessionState::Authenticated
    }

    /// The visible panel, derived from the session so both can never show at once
    pub fn view(&self) -> View {
        match self.session {
            SessionState::Unauthenticated => View::Login,
            SessionState::Authenticated => View::Main,
        }
    }

    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }

    pub fn status_text(&self) -> Option<&str> {
        self.status_text.as_deref()
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub(super) fn set_status(&mut self, message: impl Into<String>) {
        self.status_text = Some(message.into());
    }

    /// Check a submitted token and unlock the main view on a match.
    ///
    /// Returns the session state after the attempt. Submitting while already
    /// authenticated changes nothing.
    pub async fn submit_token(&mut self, token: &str) -> SessionState {
        if self.is_authenticated() {
            return self.session;
        }

        match self.validator.validate(token).await {
            Ok(true) => {
                log_info("🔓", "Token accepted, session authenticated");
                self.session = SessionState::Authenticated;
                self.feedback = Some(MSG_LOGIN_SUCCESS.to_string());
            }
            Ok(false) => {
                log_warn("🔒", "Token rejected");
                self.feedback = Some(MSG_INVALID_TOKEN.to_string());
            }
            Err(e) => {
                log_warn("⚠️", format!("Token validation failed: {}", e));
                self.feedback = Some(format!("Unable to verify token: {}", e));
            }
        }

        self.session
    }
}
