pub mod app;
pub mod cli;
pub mod constants;
pub mod portal;
pub mod providers;
pub mod runtime;
pub mod tui;
pub mod utils;

pub use app::{load_config, Config};
pub use portal::{Portal, SessionState, View};
pub use providers::{ConfigProvider, CredentialValidator, StaticBackend, StatusProvider, VpnStatus};
pub use tui::run_ui;
pub use utils::PortalError;
