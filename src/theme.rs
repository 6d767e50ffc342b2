//! Light and dark color themes for the terminal UI.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Color theme. Purely cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark background, light text.
    #[default]
    Dark,
    /// Light background, dark text.
    Light,
}

/// Colors used to draw the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background.
    pub background: Color,
    /// Primary text.
    pub foreground: Color,
    /// Highlights: active tab, progress, borders.
    pub accent: Color,
    /// Secondary text and inactive elements.
    pub muted: Color,
    /// Border color while the countdown is running.
    pub glow: Color,
}

impl Theme {
    /// The other theme.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Colors for this theme.
    #[must_use]
    pub const fn palette(&self) -> Palette {
        match self {
            Self::Dark => Palette {
                background: Color::Black,
                foreground: Color::White,
                accent: Color::Red,
                muted: Color::DarkGray,
                glow: Color::LightRed,
            },
            Self::Light => Palette {
                background: Color::White,
                foreground: Color::Black,
                accent: Color::Red,
                muted: Color::Gray,
                glow: Color::Magenta,
            },
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
