//! Timer durations and user preferences.

use serde::{Deserialize, Serialize};

use super::mode::Mode;

/// Range and granularity of a duration slider, in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SliderBounds {
    /// Smallest selectable value.
    pub min: u32,
    /// Largest selectable value.
    pub max: u32,
    /// Distance between selectable values, counted from `min`.
    pub step: u32,
}

impl SliderBounds {
    /// Clamp a value into range and round it to the nearest step.
    #[must_use]
    pub fn snap(&self, value: u32) -> u32 {
        let clamped = value.clamp(self.min, self.max);
        let steps = (clamped - self.min + self.step / 2) / self.step;
        (self.min + steps * self.step).min(self.max)
    }

    /// Move one step up, saturating at `max`.
    #[must_use]
    pub fn step_up(&self, value: u32) -> u32 {
        self.snap(value).saturating_add(self.step).min(self.max)
    }

    /// Move one step down, saturating at `min`.
    #[must_use]
    pub fn step_down(&self, value: u32) -> u32 {
        self.snap(value).saturating_sub(self.step).max(self.min)
    }

    /// Check whether a value lies on the slider.
    #[must_use]
    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value) && (value - self.min) % self.step == 0
    }
}

impl Mode {
    /// Slider bounds for this mode's duration.
    #[must_use]
    pub const fn bounds(&self) -> SliderBounds {
        match self {
            Self::Work => SliderBounds { min: 5, max: 60, step: 5 },
            Self::ShortBreak => SliderBounds { min: 1, max: 15, step: 1 },
            Self::LongBreak => SliderBounds { min: 5, max: 30, step: 5 },
        }
    }
}

/// Configured duration of each mode, in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Work session length.
    pub work: u32,
    /// Short break length.
    pub short_break: u32,
    /// Long break length.
    pub long_break: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            work: 25,
            short_break: 5,
            long_break: 15,
        }
    }
}

impl Settings {
    /// Create settings from minute values. Zero is raised to one minute.
    #[must_use]
    pub fn new(work: u32, short_break: u32, long_break: u32) -> Self {
        Self {
            work: work.max(1),
            short_break: short_break.max(1),
            long_break: long_break.max(1),
        }
    }

    /// Duration of a mode in minutes.
    #[must_use]
    pub const fn minutes(&self, mode: Mode) -> u32 {
        match mode {
            Mode::Work => self.work,
            Mode::ShortBreak => self.short_break,
            Mode::LongBreak => self.long_break,
        }
    }

    /// Duration of a mode in seconds.
    #[must_use]
    pub const fn seconds(&self, mode: Mode) -> u32 {
        self.minutes(mode) * 60
    }

    /// Set the duration of one mode.
    pub fn set_minutes(&mut self, mode: Mode, minutes: u32) {
        let minutes = minutes.max(1);
        match mode {
            Mode::Work => self.work = minutes,
            Mode::ShortBreak => self.short_break = minutes,
            Mode::LongBreak => self.long_break = minutes,
        }
    }

    /// Copy of these settings with every duration moved onto its slider.
    #[must_use]
    pub fn snapped(&self) -> Self {
        Self {
            work: Mode::Work.bounds().snap(self.work),
            short_break: Mode::ShortBreak.bounds().snap(self.short_break),
            long_break: Mode::LongBreak.bounds().snap(self.long_break),
        }
    }
}

/// Behavioral toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Start the next phase automatically after a countdown completes.
    pub auto_start_next: bool,
    /// Play the completion cue.
    pub sound_enabled: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            auto_start_next: false,
            sound_enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.minutes(Mode::Work), 25);
        assert_eq!(settings.minutes(Mode::ShortBreak), 5);
        assert_eq!(settings.minutes(Mode::LongBreak), 15);
        assert_eq!(settings.seconds(Mode::Work), 1500);
    }

    #[test]
    fn test_default_preferences() {
        let prefs = Preferences::default();
        assert!(!prefs.auto_start_next);
        assert!(prefs.sound_enabled);
    }

    #[test]
    fn test_settings_never_zero() {
        let mut settings = Settings::new(0, 0, 0);
        assert_eq!(settings, Settings::new(1, 1, 1));

        settings.set_minutes(Mode::Work, 0);
        assert_eq!(settings.work, 1);
    }

    #[test]
    fn test_snap_to_step() {
        let work = Mode::Work.bounds();
        assert_eq!(work.snap(25), 25);
        assert_eq!(work.snap(27), 25);
        assert_eq!(work.snap(28), 30);
        assert_eq!(work.snap(1), 5);
        assert_eq!(work.snap(500), 60);

        let short = Mode::ShortBreak.bounds();
        assert_eq!(short.snap(0), 1);
        assert_eq!(short.snap(7), 7);
        assert_eq!(short.snap(16), 15);
    }

    #[test]
    fn test_step_up_and_down_saturate() {
        let long = Mode::LongBreak.bounds();
        assert_eq!(long.step_up(15), 20);
        assert_eq!(long.step_up(30), 30);
        assert_eq!(long.step_down(15), 10);
        assert_eq!(long.step_down(5), 5);

        let short = Mode::ShortBreak.bounds();
        assert_eq!(short.step_down(1), 1);
        assert_eq!(short.step_up(15), 15);
    }

    #[test]
    fn test_bounds_contains() {
        assert!(Mode::Work.bounds().contains(5));
        assert!(Mode::Work.bounds().contains(60));
        assert!(!Mode::Work.bounds().contains(12));
        assert!(!Mode::LongBreak.bounds().contains(35));
        assert!(Mode::ShortBreak.bounds().contains(13));
    }

    #[test]
    fn test_snapped_settings() {
        let settings = Settings::new(3, 20, 12).snapped();
        assert_eq!(settings, Settings::new(5, 15, 10));
        assert_eq!(Settings::default().snapped(), Settings::default());
    }
}
