//! Pipeline backend client
//!
//! A thin HTTP client bound to one admin credential. No retries and no timeouts:
//! every failure is returned to the caller as an [`ApiError`].

use crate::api::error::ApiError;
use crate::api::{ADMIN_PASSWORD_HEADER, AdminApi};
use crate::environment::Environment;
use crate::models::{Job, Ticker};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

// User-Agent string with CLI version
pub const USER_AGENT: &str = concat!("pipeline-admin/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    environment: Environment,
    credential: Option<String>,
}

impl ApiClient {
    /// Creates a client for `environment`, attaching `credential` to every request when non-empty.
    ///
    /// `client` is a shared connection pool; cloning it is cheap.
    pub fn new(client: Client, environment: Environment, credential: Option<String>) -> Self {
        Self {
            client,
            environment,
            credential,
        }
    }

    fn build_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.environment.backend_url().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.credential.as_deref() {
            Some(password) if !password.is_empty() => {
                request.header(ADMIN_PASSWORD_HEADER, password)
            }
            _ => request,
        }
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    /// `GET base_url + path`, decoding the JSON body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.build_url(path);
        let response = self
            .authorize(self.client.get(&url))
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&response_bytes)?)
    }

    /// `POST base_url + path` with an empty body. The response body is discarded.
    pub async fn post(&self, path: &str) -> Result<(), ApiError> {
        let url = self.build_url(path);
        let response = self
            .authorize(self.client.post(&url))
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        Self::handle_response_status(response).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl AdminApi for ApiClient {
    async fn get_watchlist(&self) -> Result<Vec<Ticker>, ApiError> {
        self.get("/watchlist").await
    }

    async fn get_jobs(&self) -> Result<Vec<Job>, ApiError> {
        self.get("/jobs").await
    }

    async fn run_pipeline(&self) -> Result<(), ApiError> {
        self.post("/run").await
    }
}
