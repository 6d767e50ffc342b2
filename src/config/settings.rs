//! Configuration settings for pomo.
//!
//! Settings are loaded from `~/.pomo/config.yaml`. The file only seeds the
//! timer at startup; nothing the user changes while the timer runs is
//! written back.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::error::PomoError;
use crate::theme::Theme;
use crate::timer::{Mode, Preferences, Settings, DEFAULT_LONG_BREAK_INTERVAL};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Timer durations and toggles.
    pub timer: TimerConfig,
    /// Completion cue settings.
    pub sound: SoundConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color theme for the terminal UI.
    #[serde(default)]
    pub theme: Theme,
}

/// Timer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TimerConfig {
    /// Work session duration in minutes.
    #[serde(default = "default_work")]
    pub work_minutes: u32,
    /// Short break duration in minutes.
    #[serde(default = "default_short_break")]
    pub short_break_minutes: u32,
    /// Long break duration in minutes.
    #[serde(default = "default_long_break")]
    pub long_break_minutes: u32,
    /// Number of work sessions before a long break.
    #[serde(default = "default_long_break_interval")]
    pub long_break_interval: u32,
    /// Start the next phase automatically.
    #[serde(default)]
    pub auto_start_next: bool,
    /// Play a sound when a countdown completes.
    #[serde(default = "default_true")]
    pub sound_enabled: bool,
}

/// Completion cue settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SoundConfig {
    /// Audio file to play. A system sound is used when absent.
    pub file: Option<PathBuf>,
    /// Command used to play the file. Auto-detected when absent.
    pub player: Option<String>,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_work() -> u32 {
    25
}

const fn default_short_break() -> u32 {
    5
}

const fn default_long_break() -> u32 {
    15
}

const fn default_long_break_interval() -> u32 {
    DEFAULT_LONG_BREAK_INTERVAL
}

const fn default_true() -> bool {
    true
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            theme: Theme::default(),
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            work_minutes: default_work(),
            short_break_minutes: default_short_break(),
            long_break_minutes: default_long_break(),
            long_break_interval: default_long_break_interval(),
            auto_start_next: false,
            sound_enabled: default_true(),
        }
    }
}

impl TimerConfig {
    /// Durations from the config file, moved onto the slider grid.
    ///
    /// Values outside the allowed range are snapped rather than rejected.
    #[must_use]
    pub fn settings(&self) -> Settings {
        let raw = Settings::new(
            self.work_minutes,
            self.short_break_minutes,
            self.long_break_minutes,
        );
        let snapped = raw.snapped();

        for mode in Mode::ALL {
            if raw.minutes(mode) != snapped.minutes(mode) {
                tracing::warn!(
                    %mode,
                    configured = raw.minutes(mode),
                    used = snapped.minutes(mode),
                    "Configured duration is outside the allowed range; snapped"
                );
            }
        }

        snapped
    }

    /// Preference toggles from the config file.
    #[must_use]
    pub const fn preferences(&self) -> Preferences {
        Preferences {
            auto_start_next: self.auto_start_next,
            sound_enabled: self.sound_enabled,
        }
    }
}

impl Config {
    /// The values the timer will actually run with.
    ///
    /// Durations are snapped onto the slider grid and the long-break
    /// interval is at least 1.
    #[must_use]
    pub fn effective(&self) -> Self {
        let settings = self.timer.settings();
        let mut config = self.clone();
        config.timer.work_minutes = settings.work;
        config.timer.short_break_minutes = settings.short_break;
        config.timer.long_break_minutes = settings.long_break;
        config.timer.long_break_interval = self.timer.long_break_interval.max(1);
        config
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, PomoError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file; using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            PomoError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        // An empty file deserializes to null; treat it as "all defaults".
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&contents).map_err(|e| {
            PomoError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), PomoError> {
        let contents = serde_yaml::to_string(self)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                PomoError::Config(format!(
                    "Failed to create directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        std::fs::write(path, contents).map_err(|e| {
            PomoError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }
}
