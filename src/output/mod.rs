//! Output formatting for pomo.
//!
//! This module provides formatters for displaying timer data in various formats.

mod json;
mod pretty;

use std::path::Path;

use chrono::{DateTime, Local};

use crate::cli::args::OutputFormat;
use crate::config::Config;
use crate::error::PomoError;
use crate::timer::{Completion, Settings};

pub use json::*;
pub use pretty::*;

/// Format the effective configuration based on output format
///
/// Out-of-range file values are shown as the timer will use them.
///
/// # Errors
///
/// Returns `PomoError::Parse` if JSON serialization fails.
pub fn format_config(
    config: &Config,
    path: &Path,
    format: OutputFormat,
) -> Result<String, PomoError> {
    let config = config.effective();
    match format {
        OutputFormat::Pretty => Ok(format_config_pretty(&config, path)),
        OutputFormat::Json => format_config_json(&config, path),
    }
}

/// Format a completed countdown based on output format
///
/// # Errors
///
/// Returns `PomoError::Parse` if JSON serialization fails.
pub fn format_completion(
    completion: &Completion,
    settings: &Settings,
    at: DateTime<Local>,
    format: OutputFormat,
) -> Result<String, PomoError> {
    match format {
        OutputFormat::Pretty => Ok(format_completion_pretty(completion, settings, at)),
        OutputFormat::Json => format_completion_json(completion, at),
    }
}
