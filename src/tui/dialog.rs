//! Settings dialog state.
//!
//! The dialog edits a draft copy of the durations and preferences. Nothing
//! reaches the engine until the draft is applied.

use crate::timer::{Mode, Preferences, Settings};

/// A row in the settings dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Work duration slider.
    Work,
    /// Short break duration slider.
    ShortBreak,
    /// Long break duration slider.
    LongBreak,
    /// Auto-start switch.
    AutoStart,
    /// Sound switch.
    Sound,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Self; 5] = [
        Self::Work,
        Self::ShortBreak,
        Self::LongBreak,
        Self::AutoStart,
        Self::Sound,
    ];

    /// Row label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Work => "Pomodoro",
            Self::ShortBreak => "Short Break",
            Self::LongBreak => "Long Break",
            Self::AutoStart => "Auto-start breaks",
            Self::Sound => "Sound notifications",
        }
    }

    /// The mode a slider row controls.
    #[must_use]
    pub const fn mode(&self) -> Option<Mode> {
        match self {
            Self::Work => Some(Mode::Work),
            Self::ShortBreak => Some(Mode::ShortBreak),
            Self::LongBreak => Some(Mode::LongBreak),
            Self::AutoStart | Self::Sound => None,
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }
}

/// Draft values being edited in the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsForm {
    /// Draft durations, always on the slider grid.
    pub settings: Settings,
    /// Draft preferences.
    pub preferences: Preferences,
    /// Highlighted row.
    pub selected: Field,
}

impl SettingsForm {
    /// Open the form with the engine's current values.
    #[must_use]
    pub fn new(settings: Settings, preferences: Preferences) -> Self {
        Self {
            settings: settings.snapped(),
            preferences,
            selected: Field::Work,
        }
    }

    /// Highlight the next row, wrapping around.
    pub fn select_next(&mut self) {
        let i = (self.selected.index() + 1) % Field::ALL.len();
        self.selected = Field::ALL[i];
    }

    /// Highlight the previous row, wrapping around.
    pub fn select_previous(&mut self) {
        let i = (self.selected.index() + Field::ALL.len() - 1) % Field::ALL.len();
        self.selected = Field::ALL[i];
    }

    /// Move the highlighted slider up a step, or switch a toggle on.
    pub fn increase(&mut self) {
        match self.selected.mode() {
            Some(mode) => {
                let value = mode.bounds().step_up(self.settings.minutes(mode));
                self.settings.set_minutes(mode, value);
            }
            None => self.set_toggle(true),
        }
    }

    /// Move the highlighted slider down a step, or switch a toggle off.
    pub fn decrease(&mut self) {
        match self.selected.mode() {
            Some(mode) => {
                let value = mode.bounds().step_down(self.settings.minutes(mode));
                self.settings.set_minutes(mode, value);
            }
            None => self.set_toggle(false),
        }
    }

    /// Flip the highlighted toggle. Sliders are left alone.
    pub fn toggle(&mut self) {
        match self.selected {
            Field::AutoStart => {
                self.preferences.auto_start_next = !self.preferences.auto_start_next;
            }
            Field::Sound => self.preferences.sound_enabled = !self.preferences.sound_enabled,
            Field::Work | Field::ShortBreak | Field::LongBreak => {}
        }
    }

    /// Display value of a row.
    #[must_use]
    pub fn value_label(&self, field: Field) -> String {
        let on_off = |b: bool| (if b { "ON" } else { "OFF" }).to_string();
        match field {
            Field::AutoStart => on_off(self.preferences.auto_start_next),
            Field::Sound => on_off(self.preferences.sound_enabled),
            Field::Work | Field::ShortBreak | Field::LongBreak => {
                let mode = field.mode().unwrap_or_default();
                format!("{} minutes", self.settings.minutes(mode))
            }
        }
    }

    fn set_toggle(&mut self, on: bool) {
        match self.selected {
            Field::AutoStart => self.preferences.auto_start_next = on,
            Field::Sound => self.preferences.sound_enabled = on,
            Field::Work | Field::ShortBreak | Field::LongBreak => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> SettingsForm {
        SettingsForm::new(Settings::default(), Preferences::default())
    }

    #[test]
    fn test_navigation_wraps() {
        let mut form = form();
        assert_eq!(form.selected, Field::Work);

        form.select_previous();
        assert_eq!(form.selected, Field::Sound);

        form.select_next();
        form.select_next();
        assert_eq!(form.selected, Field::ShortBreak);
    }

    #[test]
    fn test_sliders_respect_bounds_and_step() {
        let mut form = form();

        form.increase();
        assert_eq!(form.settings.work, 30);
        for _ in 0..20 {
            form.increase();
        }
        assert_eq!(form.settings.work, 60);

        form.select_next();
        for _ in 0..20 {
            form.decrease();
        }
        assert_eq!(form.settings.short_break, 1);

        form.select_next();
        form.decrease();
        assert_eq!(form.settings.long_break, 10);
    }

    #[test]
    fn test_toggles() {
        let mut form = form();
        form.selected = Field::AutoStart;

        form.toggle();
        assert!(form.preferences.auto_start_next);
        form.decrease();
        assert!(!form.preferences.auto_start_next);

        form.selected = Field::Sound;
        form.toggle();
        assert!(!form.preferences.sound_enabled);
        form.increase();
        assert!(form.preferences.sound_enabled);
    }

    #[test]
    fn test_toggle_on_slider_is_ignored() {
        let mut form = form();
        let before = form.clone();
        form.toggle();
        assert_eq!(form, before);
    }

    #[test]
    fn test_value_labels() {
        let form = form();
        assert_eq!(form.value_label(Field::Work), "25 minutes");
        assert_eq!(form.value_label(Field::Sound), "ON");
        assert_eq!(form.value_label(Field::AutoStart), "OFF");
    }

    #[test]
    fn test_form_snaps_off_grid_values() {
        let form = SettingsForm::new(Settings::new(1, 5, 15), Preferences::default());
        assert_eq!(form.settings.work, 5);
    }
}
