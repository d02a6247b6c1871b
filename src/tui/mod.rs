//! Fullscreen terminal UI (TUI).
//!
//! This is intentionally small and self-contained so we can evolve it without
//! entangling the core theme/submission logic.

pub(crate) mod animation;
pub(crate) mod input;
pub(crate) mod screens;
pub(crate) mod state;
pub(crate) mod theme;
pub(crate) mod widgets;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;

use crate::config::Config;

use state::*;
use theme::UiTheme;

const FRAME_TIME: Duration = Duration::from_millis(16);

// Re-export TuiExit for use by main.
pub(crate) use state::TuiExit;

struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

pub(crate) fn run_tui(rt: &tokio::runtime::Runtime, cfg: &Config) -> Result<TuiExit> {
    let _guard = TerminalGuard::enter()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut app = App::new(cfg);

    loop {
        terminal.draw(|f| draw(f.area(), f, &app))?;

        if let Some(action) = app.pending_action.take() {
            match action {
                Action::SubmitPost(submission) => {
                    input::handle_submit_post(rt, &mut app, submission)
                }
            }
            continue;
        }

        let timeout = FRAME_TIME.saturating_sub(app.last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if input::handle_key(rt, &mut app, key)? {
                    break;
                }
            }
        }

        if app.last_tick.elapsed() >= FRAME_TIME {
            app.last_tick = std::time::Instant::now();
            app.animation.advance();
        }
    }

    Ok(app.exit.unwrap_or(TuiExit::Quit))
}

fn draw(area: Rect, f: &mut ratatui::Frame, app: &App) {
    let theme = UiTheme::default();

    // Top header bar + content area
    let outer_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // header
            Constraint::Min(0),    // content
        ])
        .split(area);

    // Header with context
    let context = match app.screen {
        Screen::Home => None,
        Screen::Compose => app
            .compose
            .as_ref()
            .map(|c| format!("COMPOSE  {}", c.card.title)),
        Screen::Result => Some("POSTED".to_string()),
        Screen::ErrorModal => None,
    };
    widgets::header::draw_header(outer_layout[0], f, &theme, context.as_deref());

    let inner = outer_layout[1];

    match app.screen {
        Screen::Home => screens::home::draw_home(inner, f, app, theme),
        Screen::Compose => screens::compose::draw_compose(inner, f, app, theme),
        Screen::Result => screens::result::draw_result(inner, f, app, theme),
        Screen::ErrorModal => {
            // Redraw the screen the error came from underneath the modal.
            match app.error_return_screen {
                Screen::Compose => screens::compose::draw_compose(inner, f, app, theme),
                Screen::Result => screens::result::draw_result(inner, f, app, theme),
                Screen::Home | Screen::ErrorModal => screens::home::draw_home(inner, f, app, theme),
            }
            screens::error::draw_error_modal(inner, f, app, theme);
        }
    }
}
