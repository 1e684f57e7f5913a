//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::api::ClientFactory;
use crate::consts::cli_consts::UI_POLL_INTERVAL_MS;
use crate::environment::Environment;
use crate::ui::dashboard::{DashboardController, DashboardState, SessionState, render_dashboard};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::Backend};
use std::time::Duration;

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
}

impl UIConfig {
    pub fn new(with_background_color: bool) -> Self {
        Self {
            with_background_color,
        }
    }
}

/// What the loop should do after a key press.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Exit,
}

/// Application state
pub struct App {
    controller: DashboardController,
}

impl App {
    /// Creates a new, locked instance of the application.
    pub fn new(environment: Environment, connect: ClientFactory, ui_config: UIConfig) -> Self {
        let state = DashboardState::new(environment, ui_config);
        Self {
            controller: DashboardController::new(state, connect),
        }
    }

    pub fn controller(&self) -> &DashboardController {
        &self.controller
    }

    /// Map a key press to a controller operation.
    ///
    /// While locked every printable key goes into the password field, so only Esc exits.
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        if key.kind == KeyEventKind::Release {
            return KeyOutcome::Continue;
        }
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            return KeyOutcome::Exit;
        }

        match self.controller.state().session_state() {
            SessionState::Locked => match key.code {
                KeyCode::Enter => self.controller.submit_login(),
                KeyCode::Backspace => self.controller.pop_login_char(),
                KeyCode::Char(c) => self.controller.push_login_char(c),
                _ => {}
            },
            SessionState::Unlocked => match key.code {
                KeyCode::Char('q') | KeyCode::Char('Q') => return KeyOutcome::Exit,
                KeyCode::Char('r') | KeyCode::Char('R') => {
                    self.controller.run_pipeline();
                }
                KeyCode::F(5) => {
                    self.controller.refresh();
                }
                _ => {}
            },
        }
        KeyOutcome::Continue
    }
}

/// Runs the application UI in a loop, handling events and rendering the current view.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    loop {
        // Apply results from finished network calls
        app.controller.drain_events();
        app.controller.tick();

        terminal.draw(|f| render_dashboard(f, app.controller.state()))?;

        // Poll for key events
        if event::poll(Duration::from_millis(UI_POLL_INTERVAL_MS))? {
            if let Event::Key(key) = event::read()? {
                if app.handle_key(key) == KeyOutcome::Exit {
                    return Ok(());
                }
            }
        }
    }
}
