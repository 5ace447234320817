//! Historical client construction and request building.
//!
//! The builder validates everything up front — key sourcing, gateway
//! normalization — so a constructed client can only produce well-formed
//! requests. Requests come back as un-sent `RequestBuilder` values; the
//! caller owns transport, retries, and downloads.

use crate::batch::SubmitJobParams;
use crate::config::{ApiConfig, ConfigError};
use histfeed_core::validation::validate_gateway;
use std::time::Duration;
use thiserror::Error;

/// Environment variable consulted when no key is passed explicitly.
pub const API_KEY_ENV: &str = "HISTFEED_API_KEY";

/// Production gateway, used when no override is supplied.
pub const DEFAULT_GATEWAY: &str = "hist.histfeed.net";

/// Errors surfaced while constructing a client.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("no API key supplied; pass one explicitly or set HISTFEED_API_KEY")]
    MissingKey,

    #[error(transparent)]
    InvalidParameter(#[from] histfeed_core::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to build HTTP client: {0}")]
    Http(String),
}

/// Builder for [`HistoricalClient`].
///
/// Key resolution order: explicit `key()` call, then the `HISTFEED_API_KEY`
/// environment variable. The gateway may be a bare host, host with path, or
/// full URL; it is normalized to absolute https before the client exists.
#[derive(Debug, Clone, Default)]
pub struct HistoricalBuilder {
    key: Option<String>,
    gateway: Option<String>,
}

impl HistoricalBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the builder from a loaded config file. Explicit `key()` and
    /// `gateway()` calls afterwards take precedence.
    pub fn from_config(config: ApiConfig) -> Self {
        Self {
            key: config.key,
            gateway: config.gateway,
        }
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn gateway(mut self, gateway: impl Into<String>) -> Self {
        self.gateway = Some(gateway.into());
        self
    }

    /// Validate the configuration and construct the client.
    pub fn build(self) -> Result<HistoricalClient, ClientError> {
        let key = match self.key {
            Some(key) => key,
            None => std::env::var(API_KEY_ENV).map_err(|_| ClientError::MissingKey)?,
        };
        if key.trim().is_empty() {
            return Err(ClientError::MissingKey);
        }

        let gateway = validate_gateway(self.gateway.as_deref().unwrap_or(DEFAULT_GATEWAY))?;

        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("histfeed/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ClientError::Http(e.to_string()))?;

        Ok(HistoricalClient { key, gateway, http })
    }
}

/// Client for the hosted historical market-data service.
///
/// Holds the normalized gateway and a configured HTTP client, and builds
/// authenticated requests against the versioned API. Never sends anything.
#[derive(Debug, Clone)]
pub struct HistoricalClient {
    key: String,
    gateway: String,
    http: reqwest::blocking::Client,
}

impl HistoricalClient {
    pub fn builder() -> HistoricalBuilder {
        HistoricalBuilder::new()
    }

    /// The normalized gateway this client addresses.
    pub fn gateway(&self) -> &str {
        &self.gateway
    }

    /// Build an authenticated GET against a versioned API path.
    pub fn get(&self, path: &str) -> reqwest::blocking::RequestBuilder {
        self.http
            .get(self.url(path))
            .basic_auth(&self.key, None::<&str>)
    }

    /// Build an authenticated POST against a versioned API path.
    pub fn post(&self, path: &str) -> reqwest::blocking::RequestBuilder {
        self.http
            .post(self.url(path))
            .basic_auth(&self.key, None::<&str>)
    }

    /// Build the batch-job submission request. Parameters were already
    /// validated when `SubmitJobParams` was built.
    pub fn submit_job_request(&self, params: &SubmitJobParams) -> reqwest::blocking::RequestBuilder {
        self.post("batch.submit_job").form(&params.to_form())
    }

    /// Build the request that lists the caller's batch jobs.
    pub fn list_jobs_request(&self) -> reqwest::blocking::RequestBuilder {
        self.get("batch.list_jobs")
    }

    /// Build the request for one result file of a finished job.
    pub fn download_request(&self, job_id: &str, filename: &str) -> reqwest::blocking::RequestBuilder {
        self.get("batch.download")
            .query(&[("job_id", job_id), ("filename", filename)])
    }

    fn url(&self, path: &str) -> String {
        format!("{}/v1/{}", self.gateway, path.trim_start_matches('/'))
    }
}
