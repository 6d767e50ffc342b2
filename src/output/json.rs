//! JSON output formatting for pomo.

use std::path::Path;

use chrono::{DateTime, Local};
use serde::Serialize;
use serde_json::json;

use crate::config::Config;
use crate::error::PomoError;
use crate::timer::Completion;

/// Format the configuration as JSON
///
/// # Errors
///
/// Returns `PomoError::Parse` if JSON serialization fails.
pub fn format_config_json(config: &Config, path: &Path) -> Result<String, PomoError> {
    let output = json!({
        "path": path,
        "exists": path.exists(),
        "config": config,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a completion as a single-line JSON event
///
/// Events are newline-delimited so a stream of them can be piped into
/// line-oriented tools.
///
/// # Errors
///
/// Returns `PomoError::Parse` if JSON serialization fails.
pub fn format_completion_json(
    completion: &Completion,
    at: DateTime<Local>,
) -> Result<String, PomoError> {
    let output = json!({
        "event": "completed",
        "at": at,
        "finished": completion.finished,
        "next": completion.next,
        "completed_work_sessions": completion.completed_work_sessions,
        "auto_start": completion.auto_start,
    });
    Ok(serde_json::to_string(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `PomoError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, PomoError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::{Mode, TimerState};
    use chrono::TimeZone;

    #[test]
    fn test_format_config_json() {
        let output = format_config_json(&Config::default(), Path::new("/nope/config.yaml")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["path"], "/nope/config.yaml");
        assert_eq!(value["exists"], false);
        assert_eq!(value["config"]["timer"]["work_minutes"], 25);
        assert_eq!(value["config"]["general"]["theme"], "dark");
    }

    #[test]
    fn test_format_completion_json_is_one_line() {
        let completion = Completion {
            finished: Mode::Work,
            next: Mode::LongBreak,
            completed_work_sessions: 4,
            auto_start: true,
        };
        let at = Local.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();

        let output = format_completion_json(&completion, at).unwrap();
        assert!(!output.contains('\n'));

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["event"], "completed");
        assert_eq!(value["finished"], "work");
        assert_eq!(value["next"], "long_break");
        assert_eq!(value["completed_work_sessions"], 4);
        assert_eq!(value["auto_start"], true);
    }

    #[test]
    fn test_to_json_timer_state() {
        let state = TimerState {
            mode: Mode::ShortBreak,
            seconds_remaining: 42,
            running: true,
            completed_work_sessions: 2,
        };
        let value: serde_json::Value = serde_json::from_str(&to_json(&state).unwrap()).unwrap();
        assert_eq!(value["mode"], "short_break");
        assert_eq!(value["seconds_remaining"], 42);
        assert_eq!(value["running"], true);
    }
}
