//! Timer commands: the interactive UI and the headless countdown.

use std::io::Write;
use std::time::Duration;

use chrono::Local;
use colored::Colorize;
use crossterm::{
    cursor::MoveToColumn,
    queue,
    terminal::{Clear, ClearType},
};

use super::build_engine;
use crate::cli::args::{OutputFormat, RunArgs, TuiArgs};
use crate::config::Config;
use crate::error::PomoError;
use crate::output::{format_completion, format_status_line};
use crate::timer::{sessions_label, Clock, TimerEngine};

/// How often the headless countdown redraws its status line.
const POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Open the interactive timer.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up.
pub fn tui(config: &Config, args: &TuiArgs) -> Result<String, PomoError> {
    let engine = build_engine(config, &args.timer);
    let theme = args.theme.unwrap_or(config.general.theme);

    crate::tui::run(engine, theme)?;
    Ok(String::new())
}

/// Count down in the shell.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn run(config: &Config, args: &RunArgs, format: OutputFormat) -> Result<String, PomoError> {
    let mut engine = build_engine(config, &args.timer);
    let mut stdout = std::io::stdout().lock();

    let finished = run_phases(&mut engine, args.phases, format, &mut stdout, || {
        std::thread::sleep(POLL_INTERVAL);
    })?;

    match format {
        OutputFormat::Json => Ok(String::new()),
        OutputFormat::Pretty => Ok(format!(
            "{} {} phase{} done, {}",
            "✔".green(),
            finished,
            if finished == 1 { "" } else { "s" },
            sessions_label(engine.completed_work_sessions())
        )),
    }
}

/// Drive an engine until `phases` countdowns have finished.
///
/// After each completion the next phase is started right away unless the
/// engine has an automatic start pending. `wait` is called between polls.
/// Returns the number of finished phases.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn run_phases<C: Clock, W: Write>(
    engine: &mut TimerEngine<C>,
    phases: u32,
    format: OutputFormat,
    out: &mut W,
    mut wait: impl FnMut(),
) -> Result<u32, PomoError> {
    let mut finished = 0;
    engine.start();

    while finished < phases {
        for completion in engine.advance() {
            finished += 1;
            let line = format_completion(&completion, &engine.settings(), Local::now(), format)?;

            if format == OutputFormat::Pretty {
                queue!(out, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
            }
            writeln!(out, "{line}")?;

            if finished >= phases {
                break;
            }
        }

        if finished >= phases {
            break;
        }

        if !engine.is_running() && !engine.pending_auto_start() {
            engine.start();
        }

        if format == OutputFormat::Pretty {
            queue!(out, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
            write!(
                out,
                "{}",
                format_status_line(&engine.state(), engine.total_seconds())
            )?;
        }
        out.flush()?;

        wait();
    }

    out.flush()?;
    Ok(finished)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::{ManualClock, Mode, Preferences, Settings};

    fn quick_engine(clock: &ManualClock, auto_start_next: bool) -> TimerEngine<ManualClock> {
        let prefs = Preferences {
            auto_start_next,
            sound_enabled: false,
        };
        TimerEngine::new(Settings::new(1, 1, 1), prefs, clock.clone())
    }

    #[test]
    fn test_run_phases_json_events() {
        let clock = ManualClock::new();
        let mut engine = quick_engine(&clock, false);
        let mut out = Vec::new();

        let finished =
            run_phases(&mut engine, 3, OutputFormat::Json, &mut out, || clock.advance_secs(1))
                .unwrap();

        assert_eq!(finished, 3);
        assert_eq!(engine.completed_work_sessions(), 2);
        assert_eq!(engine.mode(), Mode::ShortBreak);

        let text = String::from_utf8(out).unwrap();
        let events: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0]["finished"], "work");
        assert_eq!(events[1]["finished"], "short_break");
        assert_eq!(events[2]["finished"], "work");
    }

    #[test]
    fn test_run_phases_takes_real_time() {
        let clock = ManualClock::new();
        let mut engine = quick_engine(&clock, false);
        let mut out = Vec::new();

        run_phases(&mut engine, 2, OutputFormat::Json, &mut out, || clock.advance_secs(1)).unwrap();

        assert_eq!(clock.elapsed(), Duration::from_secs(120));
    }

    #[test]
    fn test_run_phases_honours_auto_start_delay() {
        let clock = ManualClock::new();
        let mut engine = quick_engine(&clock, true);
        let mut out = Vec::new();

        run_phases(&mut engine, 2, OutputFormat::Json, &mut out, || clock.advance_secs(1)).unwrap();

        assert_eq!(clock.elapsed(), Duration::from_secs(121));
    }

    #[test]
    fn test_run_phases_pretty_output() {
        let clock = ManualClock::new();
        let mut engine = quick_engine(&clock, false);
        let mut out = Vec::new();

        run_phases(&mut engine, 1, OutputFormat::Pretty, &mut out, || clock.advance_secs(1))
            .unwrap();

        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("01:00"));
        assert!(text.contains("finished"));
        assert!(text.contains("Next: Short Break"));
    }
}
