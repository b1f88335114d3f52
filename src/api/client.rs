use std::time::Duration;
use reqwest::Url;
use reqwest::blocking::Client;
use serde::de::IgnoredAny;
use crate::api::models::{RequestBody, ServiceStatus};
use crate::error::{AppError, Result};

pub const RUN_SEGMENTS: [&str; 4] = ["hitec", "completeness", "acceptance-criteria", "run"];
pub const STATUS_SEGMENTS: [&str; 4] = ["hitec", "completeness", "acceptance-criteria", "status"];

/// Blocking client for the acceptance-criteria completeness service.
pub struct CompletenessClient {
    client: Client,
    base_url: Url,
}

impl CompletenessClient {
    pub fn new(base_url: Url) -> Result<Self> {
        // The run endpoint can take minutes on large datasets, so no request timeout
        let client = Client::builder()
            .timeout(None::<Duration>)
            .build()?;

        Ok(CompletenessClient { client, base_url })
    }

    pub fn run_url(&self) -> Result<Url> {
        self.endpoint(&RUN_SEGMENTS)
    }

    pub fn status_url(&self) -> Result<Url> {
        self.endpoint(&STATUS_SEGMENTS)
    }

    /// POSTs the request and returns the raw response body. The body must be
    /// JSON but is otherwise passed through untouched.
    pub fn run(&self, body: &RequestBody) -> Result<Vec<u8>> {
        let url = self.run_url()?;
        tracing::info!(%url, documents = body.dataset.documents.len(), "Sending run request");

        let response = self.client.post(url).json(body).send()?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "Completeness service answered with a non-success status");
        }

        let bytes = response.bytes()?.to_vec();
        serde_json::from_slice::<IgnoredAny>(&bytes)?;

        Ok(bytes)
    }

    pub fn status(&self) -> Result<ServiceStatus> {
        let url = self.status_url()?;
        let status: ServiceStatus = self.client.get(url).send()?.json()?;
        Ok(status)
    }

    /// Appends `segments` to the base URL, keeping any path prefix it carries.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::ConfigError(format!("Base URL '{}' cannot carry a path", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}
