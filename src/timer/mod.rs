//! Pomodoro timer core.
//!
//! - Work / short break / long break modes
//! - Configurable durations and preferences
//! - A clock-driven countdown engine
//! - Countdown formatting and duration parsing

pub mod clock;
pub mod engine;
pub mod format;
pub mod mode;
pub mod settings;

pub use clock::{Clock, ManualClock, SystemClock};
pub use engine::{
    Completion, TimerEngine, TimerState, AUTO_START_DELAY, DEFAULT_LONG_BREAK_INTERVAL,
    TICK_INTERVAL,
};
pub use format::{
    format_duration, format_mmss, parse_minutes, progress_fraction, render_progress_bar,
    sessions_label,
};
pub use mode::Mode;
pub use settings::{Preferences, Settings, SliderBounds};
