use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing::{error, info, warn};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Sink for log lines: an appended file while the portal owns the terminal,
/// stderr for one-shot subcommands.
pub fn log_writer(log_file: Option<&Path>) -> Result<BoxMakeWriter> {
    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            Ok(BoxMakeWriter::new(Mutex::new(file)))
        }
        None => Ok(BoxMakeWriter::new(io::stderr)),
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` picks the level, falling back to `info`.
pub fn init_logger(log_file: Option<&Path>) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(log_writer(log_file)?)
                .with_ansi(log_file.is_none())
                .with_target(false)
                .compact(),
        )
        .init();

    Ok(())
}

pub fn log_info(emoji: &str, message: impl std::fmt::Display) {
    info!("{} {}", emoji, message);
}

pub fn log_warn(emoji: &str, message: impl std::fmt::Display) {
    warn!("{} {}", emoji, message);
}

pub fn log_error(emoji: &str, message: impl std::fmt::Display) {
    error!("{} {}", emoji, message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::TempDir;
    use tracing_subscriber::fmt::MakeWriter;

    #[test]
    fn test_file_writer_appends() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("vpn-portal.log");
        std::fs::write(&path, "earlier run\n").unwrap();

        let writer = log_writer(Some(&path)).unwrap();
        writer.make_writer().write_all(b"token accepted\n").unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "earlier run\ntoken accepted\n"
        );
    }

    #[test]
    fn test_file_writer_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("vpn-portal.log");

        log_writer(Some(&path)).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_unwritable_log_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("vpn-portal.log");

        assert!(log_writer(Some(&path)).is_err());
    }
}
