//! Logging system initialization.
//!
//! Sets up tracing-based logging with file output to `~/.pomo/pomo.log`.
//! Nothing is written to the terminal, which belongs to the TUI.

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Paths;
use crate::error::PomoError;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "POMO_LOG";

/// Initialize the logging system.
///
/// Log level defaults to INFO and can be configured via `POMO_LOG`
/// (same syntax as `RUST_LOG`).
///
/// # Errors
///
/// Returns an error if the log directory cannot be created or a global
/// subscriber is already installed.
pub fn init_logging(paths: &Paths) -> Result<(), PomoError> {
    paths.ensure_dirs()?;

    let file_name = paths
        .log_file
        .file_name()
        .map_or_else(|| "pomo.log".to_string(), |n| n.to_string_lossy().into_owned());

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(&paths.root)
        .map_err(|e| PomoError::Config(format!("Failed to open log file: {e}")))?;

    let subscriber = fmt()
        .with_writer(file_appender)
        .with_env_filter(filter_from_env())
        .with_ansi(false)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| PomoError::Config(format!("Failed to install logger: {e}")))?;

    tracing::info!("pomo v{} started", env!("CARGO_PKG_VERSION"));

    Ok(())
}

fn filter_from_env() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_is_info() {
        if std::env::var(LOG_ENV).is_err() {
            assert_eq!(filter_from_env().to_string(), "info");
        }
    }
}
