use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "vpn-portal")]
#[command(version)]
#[command(about = "Log in with a registration token and fetch your VPN configuration", long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Where to write the downloaded VPN configuration
    #[arg(short, long, env = "VPN_PORTAL_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Write a default configuration file
    Init,
    /// Show version information
    Version,
}
