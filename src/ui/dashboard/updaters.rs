//! Dashboard state update logic
//!
//! Contains all methods for updating dashboard state from events

use super::state::DashboardState;

use crate::api::error::ApiError;
use crate::models::{Job, Ticker};
use log::{debug, error};

impl DashboardState {
    /// Advance the animation tick. Called once per frame.
    pub fn update(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    /// Apply the joined watchlist/jobs result.
    ///
    /// Success replaces both collections wholesale. Failure keeps the previous ones.
    /// Either way the loading flag is cleared.
    pub(crate) fn apply_loaded(&mut self, result: Result<(Vec<Ticker>, Vec<Job>), ApiError>) {
        match result {
            Ok((tickers, jobs)) => {
                debug!(
                    "Loaded {} tickers and {} jobs",
                    tickers.len(),
                    jobs.len()
                );
                self.tickers = tickers;
                self.jobs = jobs;
            }
            Err(e) => {
                error!("Failed to load dashboard data: {}", e);
            }
        }
        self.loading = false;
    }
}
