use anyhow::Result;
use std::time::Duration;

use crate::{
    app::{load_config, load_config_file, Config},
    cli::{handle_command, Cli},
    portal::Portal,
    tui::{run_ui, App},
    utils::log_info,
};

/// Main runtime orchestrator
pub struct Orchestrator {
    cli: Cli,
    config: Config,
}

impl Orchestrator {
    /// Create a new orchestrator from CLI args
    pub fn new(cli: Cli) -> Result<Self> {
        let mut config = if let Some(config_path) = &cli.config {
            // An explicit file that fails to load is fatal
            load_config_file(config_path)?
        } else {
            match load_config() {
                Ok(cfg) => cfg,
                Err(e) => {
                    eprintln!("⚠️  Failed to load config: {}. Using defaults.", e);
                    Config::default()
                }
            }
        };

        if let Some(output) = &cli.output {
            config.portal.config_file = output.clone();
        }

        Ok(Self { cli, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build the portal state the UI will drive
    pub fn build_app(&self) -> App {
        let portal = Portal::with_static_backend(self.config.portal.config_file.clone());
        App::new(portal, &self.config.ui)
    }

    /// Run the orchestrator
    pub async fn run(self) -> Result<()> {
        // Subcommands never open the UI
        if let Some(command) = &self.cli.command {
            return handle_command(command);
        }

        log_info(
            "🚀",
            format!(
                "Starting portal, downloads go to {}",
                self.config.portal.config_file.display()
            ),
        );

        let app = self.build_app();
        run_ui(app, Duration::from_millis(self.config.ui.tick_rate_ms)).await
    }
}
