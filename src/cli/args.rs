use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

use crate::config::TimerConfig;
use crate::theme::Theme;
use crate::timer::{parse_minutes, Mode, Preferences, Settings};

#[derive(Parser)]
#[command(name = "pomo")]
#[command(about = "A Pomodoro timer for the terminal")]
#[command(long_about = "pomo - A Pomodoro timer for the terminal

Counts down work sessions and breaks. Every fourth finished work session
is followed by a long break, all others by a short one.

QUICK START:
  pomo                      Open the interactive timer
  pomo --work 50            Interactive timer with 50-minute sessions
  pomo run                  Count down one session in the shell
  pomo run --phases 8       Work through a full cycle without the UI
  pomo config init          Write a default config file

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Defaults to the `general.default_output` config value.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Path to the config file
    #[arg(long, global = true, env = "POMO_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive timer (default)
    ///
    /// # Keys
    ///
    ///   space      Start / pause
    ///   r          Reset the countdown
    ///   1 2 3      Pomodoro / short break / long break
    ///   tab        Next mode
    ///   s          Settings
    ///   t          Toggle light/dark theme
    ///   q          Quit
    Tui(TuiArgs),

    /// Count down in the shell without the interactive UI
    ///
    /// Runs consecutive phases and prints a line for each finished one.
    /// With --output json, prints one JSON event per line.
    ///
    /// # Examples
    ///
    ///   pomo run                   One 25-minute work session
    ///   pomo run --mode short      One short break
    ///   pomo run --phases 8 -o json
    Run(RunArgs),

    /// Show or create the config file
    Config(ConfigArgs),

    /// Generate shell completions
    ///
    /// Example: pomo completions zsh > ~/.zsh/completions/_pomo
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Timer options shared by the interactive and headless timers.
#[derive(Args, Debug, Clone, Default)]
pub struct TimerArgs {
    /// Work session length (5-60 minutes, step 5; e.g. 25, 25m, 1h)
    #[arg(long, short = 'w', value_parser = parse_work_minutes)]
    pub work: Option<u32>,

    /// Short break length (1-15 minutes)
    #[arg(long, value_parser = parse_short_break_minutes)]
    pub short_break: Option<u32>,

    /// Long break length (5-30 minutes, step 5)
    #[arg(long, value_parser = parse_long_break_minutes)]
    pub long_break: Option<u32>,

    /// Mode to start in (work, short, long)
    #[arg(long, short = 'm', value_parser = parse_mode)]
    pub mode: Option<Mode>,

    /// Start the next phase automatically
    #[arg(long)]
    pub auto_start: bool,

    /// Do not play a sound when a countdown finishes
    #[arg(long)]
    pub no_sound: bool,
}

impl TimerArgs {
    /// Merge flags over the config file values.
    #[must_use]
    pub fn resolve(&self, config: &TimerConfig) -> (Settings, Preferences) {
        let mut settings = config.settings();
        for (mode, flag) in [
            (Mode::Work, self.work),
            (Mode::ShortBreak, self.short_break),
            (Mode::LongBreak, self.long_break),
        ] {
            if let Some(minutes) = flag {
                settings.set_minutes(mode, minutes);
            }
        }

        let mut preferences = config.preferences();
        if self.auto_start {
            preferences.auto_start_next = true;
        }
        if self.no_sound {
            preferences.sound_enabled = false;
        }

        (settings, preferences)
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct TuiArgs {
    #[command(flatten)]
    pub timer: TimerArgs,

    /// Color theme
    #[arg(long, value_enum)]
    pub theme: Option<Theme>,
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    #[command(flatten)]
    pub timer: TimerArgs,

    /// Number of consecutive phases to count down
    #[arg(long, short = 'p', default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub phases: u32,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,

    /// Print the config file path
    Path,

    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long, short = 'f')]
        force: bool,
    },
}

fn parse_mode(s: &str) -> Result<Mode, String> {
    Mode::parse(s).ok_or_else(|| format!("unknown mode '{s}' (expected work, short or long)"))
}

fn parse_work_minutes(s: &str) -> Result<u32, String> {
    parse_mode_minutes(s, Mode::Work)
}

fn parse_short_break_minutes(s: &str) -> Result<u32, String> {
    parse_mode_minutes(s, Mode::ShortBreak)
}

fn parse_long_break_minutes(s: &str) -> Result<u32, String> {
    parse_mode_minutes(s, Mode::LongBreak)
}

/// Parse a duration flag and hold it to the mode's slider range.
fn parse_mode_minutes(s: &str, mode: Mode) -> Result<u32, String> {
    let minutes = parse_minutes(s)
        .ok_or_else(|| format!("invalid duration '{s}' (expected e.g. 25, 25m, 1h)"))?;

    let bounds = mode.bounds();
    if !(bounds.min..=bounds.max).contains(&minutes) {
        return Err(format!(
            "{} must be between {} and {} minutes",
            mode.display_name(),
            bounds.min,
            bounds.max
        ));
    }

    Ok(bounds.snap(minutes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["pomo"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_parse_timer_flags() {
        let cli = Cli::try_parse_from([
            "pomo", "tui", "--work", "50m", "--short-break", "10", "--mode", "long", "--auto-start",
            "--no-sound", "--theme", "light",
        ])
        .unwrap();

        let Some(Commands::Tui(args)) = cli.command else {
            panic!("expected tui command");
        };
        assert_eq!(args.timer.work, Some(50));
        assert_eq!(args.timer.short_break, Some(10));
        assert_eq!(args.timer.long_break, None);
        assert_eq!(args.timer.mode, Some(Mode::LongBreak));
        assert!(args.timer.auto_start);
        assert!(args.timer.no_sound);
        assert_eq!(args.theme, Some(Theme::Light));
    }

    #[test]
    fn test_out_of_range_flag_is_rejected() {
        assert!(Cli::try_parse_from(["pomo", "run", "--work", "90"]).is_err());
        assert!(Cli::try_parse_from(["pomo", "run", "--short-break", "0"]).is_err());
        assert!(Cli::try_parse_from(["pomo", "run", "--long-break", "1h"]).is_err());
        assert!(Cli::try_parse_from(["pomo", "run", "--phases", "0"]).is_err());
    }

    #[test]
    fn test_off_grid_flag_is_snapped() {
        assert_eq!(parse_work_minutes("27"), Ok(25));
        assert_eq!(parse_long_break_minutes("28"), Ok(30));
        assert_eq!(parse_short_break_minutes("7"), Ok(7));
    }

    #[test]
    fn test_resolve_flags_over_config() {
        let config = TimerConfig {
            work_minutes: 30,
            long_break_minutes: 20,
            ..TimerConfig::default()
        };
        let args = TimerArgs {
            work: Some(45),
            no_sound: true,
            ..TimerArgs::default()
        };

        let (settings, prefs) = args.resolve(&config);
        assert_eq!(settings, Settings::new(45, 5, 20));
        assert!(!prefs.sound_enabled);
        assert!(!prefs.auto_start_next);
    }
}
