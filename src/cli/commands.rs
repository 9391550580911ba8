use anyhow::Result;
use colored::Colorize;

use crate::app::init_config;

use super::Commands;

/// Handle CLI subcommands
pub fn handle_command(command: &Commands) -> Result<()> {
    match command {
        Commands::Init => {
            let (path, created) = init_config()?;
            if created {
                println!("Created default configuration at: {}", path.display().to_string().green());
            } else {
                println!("Configuration already exists at: {}", path.display().to_string().yellow());
            }
            Ok(())
        }
        Commands::Version => {
            show_version();
            Ok(())
        }
    }
}

/// Show version information
pub fn show_version() {
    println!("vpn-portal v{}", env!("CARGO_PKG_VERSION"));
    println!("   {}", env!("CARGO_PKG_DESCRIPTION"));
}
