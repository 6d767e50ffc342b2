//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Tabs},
    Frame,
};

use crate::theme::Palette;
use crate::timer::{format_mmss, render_progress_bar, sessions_label, Clock, Mode};
use crate::tui::app::{App, KEY_HELP};
use crate::tui::dialog::{Field, SettingsForm};

/// Render the application UI.
pub fn render<C: Clock>(frame: &mut Frame<'_>, app: &App<C>) {
    let palette = app.theme.palette();
    let base = Style::default().fg(palette.foreground).bg(palette.background);
    frame.render_widget(Block::default().style(base), frame.area());

    // Header, mode tabs, countdown, progress, sessions, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, app, &palette, chunks[0]);
    render_tabs(frame, app, &palette, chunks[1]);
    render_countdown(frame, app, &palette, chunks[2]);
    render_progress(frame, app, &palette, chunks[3]);
    render_sessions(frame, app, &palette, chunks[4]);
    render_status_bar(frame, app, &palette, chunks[5]);

    if let Some(form) = &app.dialog {
        render_settings(frame, form, &palette);
    }
}

fn render_header<C: Clock>(frame: &mut Frame<'_>, app: &App<C>, palette: &Palette, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            " Pomodoro Tracker ",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("({} theme)", app.theme),
            Style::default().fg(palette.muted),
        ),
    ]);

    let header = Paragraph::new(title).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.accent)),
    );

    frame.render_widget(header, area);
}

fn render_tabs<C: Clock>(frame: &mut Frame<'_>, app: &App<C>, palette: &Palette, area: Rect) {
    let titles = Mode::ALL
        .iter()
        .enumerate()
        .map(|(i, mode)| format!("{} {}", i + 1, mode.display_name()));

    let tabs = Tabs::new(titles)
        .select(app.engine.mode().index())
        .style(Style::default().fg(palette.muted))
        .highlight_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(tabs, area);
}

fn render_countdown<C: Clock>(frame: &mut Frame<'_>, app: &App<C>, palette: &Palette, area: Rect) {
    let running = app.engine.is_running();
    let border = if running { palette.glow } else { palette.muted };
    let state = if running {
        "running"
    } else if app.engine.pending_auto_start() {
        "starting..."
    } else {
        "paused"
    };

    let inner_height = area.height.saturating_sub(2);
    let mut lines: Vec<Line<'_>> = (0..inner_height.saturating_sub(2) / 2)
        .map(|_| Line::default())
        .collect();
    lines.push(Line::from(Span::styled(
        format_mmss(app.engine.seconds_remaining()),
        Style::default()
            .fg(palette.foreground)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        state,
        Style::default().fg(palette.muted),
    )));

    let countdown = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(format!(" {} ", app.engine.mode().display_name())),
    );

    frame.render_widget(countdown, area);
}

fn render_progress<C: Clock>(frame: &mut Frame<'_>, app: &App<C>, palette: &Palette, area: Rect) {
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(palette.accent).bg(palette.background))
        .ratio(app.engine.progress())
        .label(format!(
            "{} / {}",
            format_mmss(app.engine.seconds_remaining()),
            format_mmss(app.engine.total_seconds())
        ));

    frame.render_widget(gauge, area);
}

fn render_sessions<C: Clock>(frame: &mut Frame<'_>, app: &App<C>, palette: &Palette, area: Rect) {
    let sessions = Paragraph::new(sessions_label(app.engine.completed_work_sessions()))
        .alignment(Alignment::Center)
        .style(Style::default().fg(palette.foreground));

    frame.render_widget(sessions, area);
}

fn render_status_bar<C: Clock>(frame: &mut Frame<'_>, app: &App<C>, palette: &Palette, area: Rect) {
    let status_text = app.status.as_deref().unwrap_or(KEY_HELP);
    let status = Paragraph::new(status_text).style(Style::default().fg(palette.muted));

    frame.render_widget(status, area);
}

fn render_settings(frame: &mut Frame<'_>, form: &SettingsForm, palette: &Palette) {
    let area = centered_rect(70, 60, frame.area());
    frame.render_widget(Clear, area);

    let mut lines = Vec::new();
    for field in Field::ALL {
        let selected = field == form.selected;
        let marker = if selected { "> " } else { "  " };
        let style = if selected {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.foreground)
        };

        let mut spans = vec![Span::styled(
            format!("{marker}{:<20}", field.label()),
            style,
        )];
        if let Some(mode) = field.mode() {
            let bounds = mode.bounds();
            let value = form.settings.minutes(mode);
            let fraction = f64::from(value - bounds.min) / f64::from(bounds.max - bounds.min);
            spans.push(Span::styled(
                format!("{} ", render_progress_bar(fraction, 10)),
                Style::default().fg(palette.muted),
            ));
        }
        spans.push(Span::styled(form.value_label(field), style));

        lines.push(Line::from(spans));
        lines.push(Line::default());
    }
    lines.push(Line::from(Span::styled(
        "↑↓ select  ←→ adjust  space toggle  enter apply  esc cancel",
        Style::default().fg(palette.muted),
    )));

    let dialog = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.accent))
            .title(" Timer Settings ")
            .style(Style::default().bg(palette.background)),
    );

    frame.render_widget(dialog, area);
}

/// A rectangle centered in `r`, sized by percentage.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
