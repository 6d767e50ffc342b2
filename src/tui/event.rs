//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::PomoError;
use crate::timer::Mode;
use crate::tui::app::Action;

/// Translate a key press into an action.
///
/// While the settings dialog is open, keys drive the dialog instead of the
/// timer.
#[must_use]
pub fn map_key(key: KeyEvent, dialog_open: bool) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    if dialog_open {
        return match key.code {
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => Some(Action::NextField),
            KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => Some(Action::PreviousField),
            KeyCode::Right | KeyCode::Char('l' | '+') => Some(Action::Increase),
            KeyCode::Left | KeyCode::Char('h' | '-') => Some(Action::Decrease),
            KeyCode::Char(' ') => Some(Action::ToggleField),
            KeyCode::Enter => Some(Action::ApplySettings),
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::CancelSettings),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(' ') => Some(Action::ToggleRunning),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Char('1') => Some(Action::SwitchMode(Mode::Work)),
        KeyCode::Char('2') => Some(Action::SwitchMode(Mode::ShortBreak)),
        KeyCode::Char('3') => Some(Action::SwitchMode(Mode::LongBreak)),
        KeyCode::Tab => Some(Action::NextMode),
        KeyCode::Char('s') => Some(Action::OpenSettings),
        KeyCode::Char('t') => Some(Action::ToggleTheme),
        KeyCode::Char('?') => Some(Action::Help),
        _ => None,
    }
}

/// Handle terminal events.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(dialog_open: bool) -> Result<Option<Action>, PomoError> {
    if event::poll(Duration::from_millis(100))
        .map_err(|e| PomoError::Terminal(format!("Event poll failed: {e}")))?
    {
        if let Event::Key(key) =
            event::read().map_err(|e| PomoError::Terminal(format!("Event read failed: {e}")))?
        {
            // Windows reports releases too
            if key.kind == KeyEventKind::Press {
                return Ok(map_key(key, dialog_open));
            }
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_timer_keys() {
        assert_eq!(map_key(press(KeyCode::Char(' ')), false), Some(Action::ToggleRunning));
        assert_eq!(map_key(press(KeyCode::Char('r')), false), Some(Action::Reset));
        assert_eq!(
            map_key(press(KeyCode::Char('3')), false),
            Some(Action::SwitchMode(Mode::LongBreak))
        );
        assert_eq!(map_key(press(KeyCode::Tab), false), Some(Action::NextMode));
        assert_eq!(map_key(press(KeyCode::Char('s')), false), Some(Action::OpenSettings));
        assert_eq!(map_key(press(KeyCode::Char('t')), false), Some(Action::ToggleTheme));
        assert_eq!(map_key(press(KeyCode::Esc), false), Some(Action::Quit));
        assert_eq!(map_key(press(KeyCode::Char('x')), false), None);
    }

    #[test]
    fn test_dialog_keys() {
        assert_eq!(map_key(press(KeyCode::Down), true), Some(Action::NextField));
        assert_eq!(map_key(press(KeyCode::Up), true), Some(Action::PreviousField));
        assert_eq!(map_key(press(KeyCode::Right), true), Some(Action::Increase));
        assert_eq!(map_key(press(KeyCode::Left), true), Some(Action::Decrease));
        assert_eq!(map_key(press(KeyCode::Char(' ')), true), Some(Action::ToggleField));
        assert_eq!(map_key(press(KeyCode::Enter), true), Some(Action::ApplySettings));
        assert_eq!(map_key(press(KeyCode::Esc), true), Some(Action::CancelSettings));
        assert_eq!(map_key(press(KeyCode::Char('1')), true), None);
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key, false), Some(Action::Quit));
        assert_eq!(map_key(key, true), Some(Action::Quit));
    }
}
