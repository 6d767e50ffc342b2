//! Formatting and parsing helpers for countdowns.

use chrono::Duration;
use once_cell::sync::Lazy;
use regex::Regex;

static DURATION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(\d+)\s*h)?\s*(?:(\d+)\s*m?)?$")
        .unwrap_or_else(|e| panic!("Invalid duration regex: {e}"))
});

/// Format a number of seconds as `MM:SS`.
///
/// Minutes are not wrapped into hours, so an hour-long session shows `60:00`.
#[must_use]
pub fn format_mmss(seconds: u32) -> String {
    let minutes = seconds / 60;
    let seconds = seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Format a duration as a human-readable string.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let total_minutes = d.num_minutes();

    if total_minutes < 1 {
        let seconds = d.num_seconds();
        return format!("{} second{}", seconds, plural(seconds));
    }

    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    match (hours, minutes) {
        (0, m) => format!("{} minute{}", m, plural(m)),
        (h, 0) => format!("{} hour{}", h, plural(h)),
        (h, m) => format!("{} hour{}, {} minute{}", h, plural(h), m, plural(m)),
    }
}

/// Parse a duration in whole minutes: `25`, `25m`, `1h`, `1h30m`.
#[must_use]
pub fn parse_minutes(s: &str) -> Option<u32> {
    let s = s.trim().to_lowercase();
    if s.is_empty() {
        return None;
    }

    let caps = DURATION_PATTERN.captures(&s)?;
    let hours: u32 = caps.get(1).map_or(Ok(0), |m| m.as_str().parse()).ok()?;
    let minutes: u32 = caps.get(2).map_or(Ok(0), |m| m.as_str().parse()).ok()?;

    let total = hours.checked_mul(60)?.checked_add(minutes)?;
    (total > 0).then_some(total)
}

/// Fraction of a countdown still remaining, clamped to `0.0..=1.0`.
#[must_use]
pub fn progress_fraction(remaining: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (f64::from(remaining) / f64::from(total)).clamp(0.0, 1.0)
}

/// Label for the completed session counter.
#[must_use]
pub fn sessions_label(count: u32) -> String {
    format!(
        "{count} {} completed",
        if count == 1 { "session" } else { "sessions" }
    )
}

/// Render a text progress bar.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_progress_bar(progress: f64, width: usize) -> String {
    let filled = ((progress.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    let empty = width - filled;

    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}

const fn plural(n: i64) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}
