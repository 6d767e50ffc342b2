//! Command implementations for pomo.
//!
//! This module contains the implementation of all CLI commands.

mod completions;
mod config;
mod timer;

pub use completions::completions;
pub use config::config;
pub use timer::{run, run_phases, tui};

use crate::cli::args::TimerArgs;
use crate::config::Config;
use crate::notify::SoundCue;
use crate::timer::TimerEngine;

/// Build an engine from the config file and command-line flags.
#[must_use]
pub fn build_engine(config: &Config, args: &TimerArgs) -> TimerEngine {
    let (settings, preferences) = args.resolve(&config.timer);
    let cue = SoundCue::new(config.sound.file.clone(), config.sound.player.clone());

    let mut engine = TimerEngine::with_system_clock(settings, preferences)
        .with_notifier(Box::new(cue))
        .with_long_break_interval(config.timer.long_break_interval);

    if let Some(mode) = args.mode {
        engine.switch_mode(mode);
    }

    tracing::debug!(?settings, ?preferences, mode = %engine.mode(), "Engine ready");
    engine
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::Mode;

    #[test]
    fn test_build_engine_applies_flags() {
        let args = TimerArgs {
            long_break: Some(20),
            mode: Some(Mode::LongBreak),
            ..TimerArgs::default()
        };

        let engine = build_engine(&Config::default(), &args);

        assert_eq!(engine.mode(), Mode::LongBreak);
        assert_eq!(engine.seconds_remaining(), 20 * 60);
        assert!(!engine.is_running());
    }

    #[test]
    fn test_build_engine_defaults() {
        let engine = build_engine(&Config::default(), &TimerArgs::default());

        assert_eq!(engine.mode(), Mode::Work);
        assert_eq!(engine.seconds_remaining(), 1500);
        assert!(engine.preferences().sound_enabled);
    }
}
