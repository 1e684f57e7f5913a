//! Dashboard state management
//!
//! Contains the main dashboard state struct and related enums

use crate::environment::Environment;
use crate::models::{Job, Ticker};
use crate::ui::app::UIConfig;

/// Which top-level view is shown.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum SessionState {
    /// No credential yet: only the login form is rendered.
    Locked,
    /// Credential present: watchlist and jobs are rendered.
    Unlocked,
}

/// Everything the dashboard renders. Mutated only by the controller.
#[derive(Debug)]
pub struct DashboardState {
    /// Admin password, held in memory only.
    pub credential: Option<String>,
    /// Current contents of the login form's password field.
    pub login_input: String,
    /// Watchlist from the most recent successful load.
    pub tickers: Vec<Ticker>,
    /// Job history from the most recent successful load.
    pub jobs: Vec<Job>,
    /// True while a load is in flight.
    pub loading: bool,

    /// The backend the client talks to.
    pub environment: Environment,
    /// Animation tick counter
    pub tick: usize,
    /// Whether to enable background colors
    pub with_background_color: bool,
}

impl DashboardState {
    /// Creates a locked, empty dashboard state.
    pub fn new(environment: Environment, ui_config: UIConfig) -> Self {
        Self {
            credential: None,
            login_input: String::new(),
            tickers: Vec::new(),
            jobs: Vec::new(),
            loading: false,
            environment,
            tick: 0,
            with_background_color: ui_config.with_background_color,
        }
    }

    pub fn session_state(&self) -> SessionState {
        match self.credential {
            Some(_) => SessionState::Unlocked,
            None => SessionState::Locked,
        }
    }

    pub fn is_locked(&self) -> bool {
        self.session_state() == SessionState::Locked
    }
}
