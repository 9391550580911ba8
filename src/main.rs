use anyhow::Result;
use clap::Parser;

use vpn_portal::{
    app::get_config_dir, cli::Cli, constants::LOG_FILE_NAME, runtime::Orchestrator,
    utils::init_logger,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    if cli.verbose {
        // The full-screen UI owns the terminal, so its logs go to a file
        let log_file = match cli.command {
            None => Some(get_config_dir()?.join(LOG_FILE_NAME)),
            Some(_) => None,
        };
        init_logger(log_file.as_deref())?;
    }

    let orchestrator = Orchestrator::new(cli)?;
    orchestrator.run().await
}
