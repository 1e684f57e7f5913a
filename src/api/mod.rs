use crate::api::error::ApiError;
use crate::models::{Job, Ticker};
use std::sync::Arc;

pub(crate) mod client;
pub use client::ApiClient;
pub mod error;

#[cfg(test)]
use mockall::automock;

/// Header carrying the admin credential on every authenticated request.
pub const ADMIN_PASSWORD_HEADER: &str = "x-admin-password";

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait AdminApi: Send + Sync {
    /// Fetch the monitored tickers (`GET /watchlist`).
    async fn get_watchlist(&self) -> Result<Vec<Ticker>, ApiError>;

    /// Fetch the pipeline job history (`GET /jobs`).
    async fn get_jobs(&self) -> Result<Vec<Job>, ApiError>;

    /// Trigger a pipeline run (`POST /run`). The response body is ignored.
    async fn run_pipeline(&self) -> Result<(), ApiError>;
}

/// Builds an API client bound to the given credential.
pub type ClientFactory = Box<dyn Fn(Option<&str>) -> Arc<dyn AdminApi> + Send + Sync>;
