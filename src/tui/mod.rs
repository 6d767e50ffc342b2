//! Terminal User Interface (TUI) for pomo.
//!
//! Shows the countdown, mode tabs, a progress gauge and the settings dialog.
//! Built with ratatui and crossterm.

mod app;
mod dialog;
mod event;
mod ui;

pub use app::{Action, App};
pub use dialog::{Field, SettingsForm};

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::error::PomoError;
use crate::theme::Theme;
use crate::timer::{Clock, TimerEngine};

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run<C: Clock>(engine: TimerEngine<C>, theme: Theme) -> Result<(), PomoError> {
    // Setup terminal
    enable_raw_mode()
        .map_err(|e| PomoError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| PomoError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| PomoError::Terminal(format!("Failed to create terminal: {e}")))?;

    let mut app = App::new(engine, theme);
    tracing::info!(mode = %app.engine.mode(), theme = %theme, "Starting TUI");
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// Run the main application loop.
fn run_app<B: Backend, C: Clock>(
    terminal: &mut Terminal<B>,
    app: &mut App<C>,
) -> Result<(), PomoError> {
    while !app.should_quit {
        app.on_tick();

        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| PomoError::Terminal(format!("Failed to draw: {e}")))?;

        if let Some(action) = event::handle_events(app.dialog.is_some())? {
            app.dispatch(action);
        }
    }

    tracing::info!(
        completed = app.engine.completed_work_sessions(),
        "Leaving TUI"
    );
    Ok(())
}
