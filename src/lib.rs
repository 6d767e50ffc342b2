//! pomo - A Pomodoro timer for the terminal
//!
//! The countdown logic lives in [`timer::TimerEngine`], a clock-driven state
//! machine shared by the interactive UI and the headless `run` command.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod notify;
pub mod output;
pub mod theme;
pub mod timer;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::PomoError;
pub use theme::Theme;
pub use timer::{Completion, Mode, Preferences, Settings, TimerEngine, TimerState};
