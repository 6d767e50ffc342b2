//! Application state for the TUI.

use chrono::Local;

use crate::theme::Theme;
use crate::timer::{Clock, Completion, Mode, SystemClock, TimerEngine};
use crate::tui::dialog::SettingsForm;

/// Short key reference shown in the status bar.
pub const KEY_HELP: &str =
    "space:start/pause | r:reset | 1/2/3:mode | tab:next | s:settings | t:theme | q:quit";

/// Something the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Start or pause the countdown.
    ToggleRunning,
    /// Refill the countdown.
    Reset,
    /// Switch to a specific mode.
    SwitchMode(Mode),
    /// Switch to the next mode in display order.
    NextMode,
    /// Flip between light and dark.
    ToggleTheme,
    /// Show the key reference.
    Help,
    /// Open the settings dialog.
    OpenSettings,
    /// Settings dialog: highlight the next row.
    NextField,
    /// Settings dialog: highlight the previous row.
    PreviousField,
    /// Settings dialog: step the highlighted row up.
    Increase,
    /// Settings dialog: step the highlighted row down.
    Decrease,
    /// Settings dialog: flip the highlighted toggle.
    ToggleField,
    /// Settings dialog: commit the draft.
    ApplySettings,
    /// Settings dialog: discard the draft.
    CancelSettings,
}

/// Application state.
pub struct App<C: Clock = SystemClock> {
    /// The timer being displayed.
    pub engine: TimerEngine<C>,
    /// Current color theme.
    pub theme: Theme,
    /// Open settings dialog, if any.
    pub dialog: Option<SettingsForm>,
    /// Status message to display.
    pub status: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl<C: Clock> App<C> {
    /// Create a new app instance.
    #[must_use]
    pub fn new(engine: TimerEngine<C>, theme: Theme) -> Self {
        Self {
            engine,
            theme,
            dialog: None,
            status: Some("Press ? for help".to_string()),
            should_quit: false,
        }
    }

    /// Let the engine catch up with the clock.
    pub fn on_tick(&mut self) {
        for completion in self.engine.advance() {
            self.status = Some(completion_message(&completion));
        }
    }

    /// Apply a user action.
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ToggleRunning => {
                self.engine.toggle();
                self.status = None;
            }
            Action::Reset => {
                self.engine.reset();
                self.status = Some("Timer reset".to_string());
            }
            Action::SwitchMode(mode) => self.switch_mode(mode),
            Action::NextMode => self.switch_mode(self.engine.mode().cycle()),
            Action::ToggleTheme => {
                self.theme = self.theme.toggle();
                tracing::debug!(theme = %self.theme, "Theme toggled");
            }
            Action::Help => self.status = Some(KEY_HELP.to_string()),
            Action::OpenSettings => {
                self.dialog = Some(SettingsForm::new(
                    self.engine.settings(),
                    self.engine.preferences(),
                ));
            }
            Action::NextField => self.with_dialog(SettingsForm::select_next),
            Action::PreviousField => self.with_dialog(SettingsForm::select_previous),
            Action::Increase => self.with_dialog(SettingsForm::increase),
            Action::Decrease => self.with_dialog(SettingsForm::decrease),
            Action::ToggleField => self.with_dialog(SettingsForm::toggle),
            Action::ApplySettings => self.apply_settings(),
            Action::CancelSettings => self.dialog = None,
        }
    }

    fn switch_mode(&mut self, mode: Mode) {
        self.engine.switch_mode(mode);
        self.status = None;
    }

    fn with_dialog(&mut self, f: impl FnOnce(&mut SettingsForm)) {
        if let Some(form) = self.dialog.as_mut() {
            f(form);
        }
    }

    fn apply_settings(&mut self) {
        if let Some(form) = self.dialog.take() {
            self.engine.update_settings(form.settings);
            self.engine.set_preferences(form.preferences);
            self.status = Some("Settings applied".to_string());
        }
    }
}

/// Status bar text for a finished countdown.
fn completion_message(completion: &Completion) -> String {
    let next = if completion.auto_start {
        format!("{} starts in a moment", completion.next)
    } else {
        format!("press space to start {}", completion.next)
    };

    format!(
        "{} finished at {} - {}",
        completion.finished,
        Local::now().format("%H:%M"),
        next
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::{ManualClock, Preferences, Settings};

    fn app() -> (App<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let prefs = Preferences {
            auto_start_next: false,
            sound_enabled: false,
        };
        let engine = TimerEngine::new(Settings::default(), prefs, clock.clone());
        (App::new(engine, Theme::Dark), clock)
    }

    #[test]
    fn test_toggle_running_and_tick() {
        let (mut app, clock) = app();
        app.dispatch(Action::ToggleRunning);
        assert!(app.engine.is_running());

        clock.advance_secs(3);
        app.on_tick();
        assert_eq!(app.engine.seconds_remaining(), 1497);

        app.dispatch(Action::ToggleRunning);
        clock.advance_secs(3);
        app.on_tick();
        assert_eq!(app.engine.seconds_remaining(), 1497);
    }

    #[test]
    fn test_completion_sets_status() {
        let (mut app, clock) = app();
        app.dispatch(Action::ToggleRunning);
        clock.advance_secs(1500);
        app.on_tick();

        let status = app.status.clone().unwrap();
        assert!(status.starts_with("Pomodoro finished"));
        assert!(status.contains("press space to start Short Break"));
    }

    #[test]
    fn test_mode_switching() {
        let (mut app, _) = app();
        app.dispatch(Action::SwitchMode(Mode::LongBreak));
        assert_eq!(app.engine.mode(), Mode::LongBreak);
        assert_eq!(app.engine.seconds_remaining(), 900);

        app.dispatch(Action::NextMode);
        assert_eq!(app.engine.mode(), Mode::Work);
    }

    #[test]
    fn test_theme_toggle() {
        let (mut app, _) = app();
        app.dispatch(Action::ToggleTheme);
        assert_eq!(app.theme, Theme::Light);
    }

    #[test]
    fn test_settings_apply_rescales_current_mode() {
        let (mut app, _) = app();
        app.dispatch(Action::OpenSettings);
        app.dispatch(Action::Increase);
        app.dispatch(Action::NextField);
        app.dispatch(Action::NextField);
        app.dispatch(Action::NextField);
        app.dispatch(Action::ToggleField);

        // Nothing reaches the engine before apply.
        assert_eq!(app.engine.seconds_remaining(), 1500);

        app.dispatch(Action::ApplySettings);
        assert!(app.dialog.is_none());
        assert_eq!(app.engine.settings().work, 30);
        assert_eq!(app.engine.seconds_remaining(), 1800);
        assert!(app.engine.preferences().auto_start_next);
    }

    #[test]
    fn test_settings_cancel_discards_draft() {
        let (mut app, _) = app();
        app.dispatch(Action::OpenSettings);
        app.dispatch(Action::Increase);
        app.dispatch(Action::CancelSettings);

        assert!(app.dialog.is_none());
        assert_eq!(app.engine.settings(), Settings::default());
    }

    #[test]
    fn test_dialog_actions_without_dialog_are_ignored() {
        let (mut app, _) = app();
        app.dispatch(Action::Increase);
        app.dispatch(Action::ApplySettings);
        assert_eq!(app.engine.settings(), Settings::default());
    }

    #[test]
    fn test_quit() {
        let (mut app, _) = app();
        app.dispatch(Action::Quit);
        assert!(app.should_quit);
    }
}
