//! Config command implementation.

use std::path::Path;

use colored::Colorize;
use serde_json::json;

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::Config;
use crate::error::PomoError;
use crate::output::{format_config, to_json};

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the config file cannot be written or output
/// formatting fails.
pub fn config(
    cmd: ConfigCommands,
    config: &Config,
    path: &Path,
    format: OutputFormat,
) -> Result<String, PomoError> {
    match cmd {
        ConfigCommands::Show => format_config(config, path, format),

        ConfigCommands::Path => match format {
            OutputFormat::Json => to_json(&json!({ "path": path })),
            OutputFormat::Pretty => Ok(path.display().to_string()),
        },

        ConfigCommands::Init { force } => init_config(path, force, format),
    }
}

/// Write the default configuration.
fn init_config(path: &Path, force: bool, format: OutputFormat) -> Result<String, PomoError> {
    if path.exists() && !force {
        return Err(PomoError::Config(format!(
            "Config file already exists: {}\nUse --force to overwrite.",
            path.display()
        )));
    }

    Config::default().save_to_path(path)?;
    tracing::info!(path = %path.display(), "Wrote default config");

    match format {
        OutputFormat::Json => to_json(&json!({ "path": path, "written": true })),
        OutputFormat::Pretty => Ok(format!(
            "{} Wrote default config to {}",
            "✔".green(),
            path.display()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");

        let output = config(
            ConfigCommands::Init { force: false },
            &Config::default(),
            &path,
            OutputFormat::Pretty,
        )
        .unwrap();

        assert!(output.contains("Wrote default config"));
        assert_eq!(Config::load_from_path(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        std::fs::write(&path, "timer:\n  work_minutes: 40\n").unwrap();

        let err = config(
            ConfigCommands::Init { force: false },
            &Config::default(),
            &path,
            OutputFormat::Pretty,
        )
        .unwrap_err();
        assert!(err.to_string().contains("--force"));

        config(
            ConfigCommands::Init { force: true },
            &Config::default(),
            &path,
            OutputFormat::Json,
        )
        .unwrap();
        assert_eq!(Config::load_from_path(&path).unwrap().timer.work_minutes, 25);
    }

    #[test]
    fn test_path_json() {
        let output = config(
            ConfigCommands::Path,
            &Config::default(),
            Path::new("/x/config.yaml"),
            OutputFormat::Json,
        )
        .unwrap();
        assert!(output.contains("/x/config.yaml"));
    }
}
