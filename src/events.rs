//! Event System
//!
//! Results sent back from background network tasks to the UI loop.

use crate::api::error::ApiError;
use crate::models::{Job, Ticker};

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    /// Both watchlist and job reads finished.
    DataLoaded,
    /// The pipeline trigger finished.
    PipelineRun,
}

#[derive(Debug)]
pub enum Event {
    /// Joined result of `GET /watchlist` and `GET /jobs`. Either failing fails both.
    DataLoaded(Result<(Vec<Ticker>, Vec<Job>), ApiError>),
    /// Result of `POST /run`.
    PipelineRun(Result<(), ApiError>),
}

impl Event {
    pub fn event_type(&self) -> EventType {
        match self {
            Event::DataLoaded(_) => EventType::DataLoaded,
            Event::PipelineRun(_) => EventType::PipelineRun,
        }
    }

    pub fn is_success(&self) -> bool {
        match self {
            Event::DataLoaded(result) => result.is_ok(),
            Event::PipelineRun(result) => result.is_ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_and_outcome() {
        let loaded = Event::DataLoaded(Ok((Vec::new(), Vec::new())));
        assert_eq!(loaded.event_type(), EventType::DataLoaded);
        assert!(loaded.is_success());

        let failed = Event::PipelineRun(Err(ApiError::Http {
            status: 500,
            message: "boom".to_string(),
        }));
        assert_eq!(failed.event_type(), EventType::PipelineRun);
        assert!(!failed.is_success());
        assert_eq!(failed.event_type().to_string(), "PipelineRun");
    }
}
