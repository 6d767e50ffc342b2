//! Timer modes.
//!
//! A Pomodoro cycle alternates between focused work and breaks. Exactly one
//! mode is active at any time.

use serde::{Deserialize, Serialize};

/// The phase the timer is counting down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Focused work session (a "pomodoro").
    #[default]
    Work,
    /// Short rest after a work session.
    ShortBreak,
    /// Long rest after every fourth work session.
    LongBreak,
}

impl Mode {
    /// All modes in display order.
    pub const ALL: [Self; 3] = [Self::Work, Self::ShortBreak, Self::LongBreak];

    /// Parse a mode from user input.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "work" | "pomodoro" | "pomo" | "w" | "p" => Some(Self::Work),
            "short" | "short-break" | "short_break" | "shortbreak" | "sb" | "s" => {
                Some(Self::ShortBreak)
            }
            "long" | "long-break" | "long_break" | "longbreak" | "lb" | "l" => {
                Some(Self::LongBreak)
            }
            _ => None,
        }
    }

    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Work => "Pomodoro",
            Self::ShortBreak => "Short Break",
            Self::LongBreak => "Long Break",
        }
    }

    /// Check if this is a break mode.
    #[must_use]
    pub const fn is_break(&self) -> bool {
        matches!(self, Self::ShortBreak | Self::LongBreak)
    }

    /// Position of this mode in [`Mode::ALL`].
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Work => 0,
            Self::ShortBreak => 1,
            Self::LongBreak => 2,
        }
    }

    /// The mode after this one in display order, wrapping around.
    #[must_use]
    pub const fn cycle(&self) -> Self {
        match self {
            Self::Work => Self::ShortBreak,
            Self::ShortBreak => Self::LongBreak,
            Self::LongBreak => Self::Work,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
