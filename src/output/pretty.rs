use std::path::Path;

use chrono::{DateTime, Duration, Local};
use colored::Colorize;

use crate::config::Config;
use crate::timer::{
    format_duration, format_mmss, render_progress_bar, sessions_label, Completion, Mode, Settings,
    TimerState,
};

/// Format the effective configuration as pretty output
pub fn format_config_pretty(config: &Config, path: &Path) -> String {
    let source = if path.exists() {
        path.display().to_string()
    } else {
        format!("{} (not found, using defaults)", path.display())
    };

    let timer = &config.timer;
    let on_off = |b: bool| if b { "on".green() } else { "off".red() };

    let mut output = format!("{}\n", "Configuration".bold());
    output.push_str(&"─".repeat(40));
    output.push('\n');
    output.push_str(&format!("  {}: {}\n", "File".dimmed(), source));
    output.push('\n');

    for (mode, minutes) in [
        (Mode::Work, timer.work_minutes),
        (Mode::ShortBreak, timer.short_break_minutes),
        (Mode::LongBreak, timer.long_break_minutes),
    ] {
        let bounds = mode.bounds();
        output.push_str(&format!(
            "  {:<12} {:>3} min  {}\n",
            mode.display_name(),
            minutes,
            format!("({}–{}, step {})", bounds.min, bounds.max, bounds.step).dimmed()
        ));
    }

    output.push_str(&format!(
        "  {:<12} every {} sessions\n",
        "Long break", timer.long_break_interval
    ));
    output.push('\n');
    output.push_str(&format!(
        "  {:<12} {}\n",
        "Auto-start",
        on_off(timer.auto_start_next)
    ));
    output.push_str(&format!("  {:<12} {}\n", "Sound", on_off(timer.sound_enabled)));

    if let Some(file) = &config.sound.file {
        output.push_str(&format!("  {:<12} {}\n", "Sound file", file.display()));
    }
    if let Some(player) = &config.sound.player {
        output.push_str(&format!("  {:<12} {}\n", "Player", player));
    }

    output.push_str(&format!("  {:<12} {}\n", "Theme", config.general.theme));

    output
}

/// Format a one-line countdown status, suitable for redrawing in place
pub fn format_status_line(state: &TimerState, total_seconds: u32) -> String {
    let icon = if state.running { "▶" } else { "⏸" };
    let fraction = crate::timer::progress_fraction(state.seconds_remaining, total_seconds);

    format!(
        "{} {:<11} {} {}  {}",
        icon,
        state.mode.display_name(),
        format_mmss(state.seconds_remaining).bold(),
        render_progress_bar(fraction, 20),
        sessions_label(state.completed_work_sessions).dimmed()
    )
}

/// Format a completed countdown as pretty output
pub fn format_completion_pretty(
    completion: &Completion,
    settings: &Settings,
    at: DateTime<Local>,
) -> String {
    let icon = if completion.finished.is_break() { "☕" } else { "🍅" };
    let next_minutes = i64::from(settings.minutes(completion.next));

    let mut line = format!(
        "{} {} {} finished. Next: {} ({})",
        at.format("%H:%M").to_string().dimmed(),
        icon,
        completion.finished.display_name().bold(),
        completion.next.display_name(),
        format_duration(Duration::minutes(next_minutes))
    );

    if !completion.finished.is_break() {
        line.push_str(&format!(
            " - {}",
            sessions_label(completion.completed_work_sessions).green()
        ));
    }

    line
}
