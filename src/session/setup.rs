//! Session setup and initialization

use crate::api::{AdminApi, ApiClient, ClientFactory};
use crate::environment::Environment;
use reqwest::{Client, ClientBuilder};
use std::error::Error;
use std::sync::Arc;

/// Session data for both TUI and headless modes
#[derive(Debug, Clone)]
pub struct SessionData {
    /// Backend the session talks to
    pub environment: Environment,
    /// Shared HTTP connection pool
    pub http_client: Client,
}

impl SessionData {
    /// Client factory for the dashboard: every credential gets its own bound client
    /// over the shared connection pool.
    pub fn client_factory(&self) -> ClientFactory {
        let http_client = self.http_client.clone();
        let environment = self.environment.clone();
        Box::new(move |credential| -> Arc<dyn AdminApi> {
            Arc::new(ApiClient::new(
                http_client.clone(),
                environment.clone(),
                credential.map(str::to_string),
            ))
        })
    }

    /// A client bound to `credential`, for one-shot commands.
    pub fn client(&self, credential: Option<String>) -> ApiClient {
        ApiClient::new(self.http_client.clone(), self.environment.clone(), credential)
    }
}

/// Sets up a session
///
/// Resolves the backend from the optional URL override and builds the HTTP client.
/// No request timeout is configured.
///
/// # Arguments
/// * `backend_url` - Base URL override from the command line or environment
///
/// # Returns
/// * `Ok(SessionData)` - Successfully set up session
/// * `Err` - The HTTP client could not be created
pub fn setup_session(backend_url: Option<&str>) -> Result<SessionData, Box<dyn Error>> {
    let environment = Environment::from_override(backend_url);
    let http_client = ClientBuilder::new().build()?;

    Ok(SessionData {
        environment,
        http_client,
    })
}
