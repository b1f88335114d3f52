use std::path::PathBuf;
use std::time::Instant;
use crate::api::client::CompletenessClient;
use crate::api::request::build_request;
use crate::config::Config;
use crate::error::Result;
use crate::loader::load_rows;
use crate::output::write_response;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub documents: usize,
    pub response_bytes: usize,
    pub output_path: PathBuf,
}

/// Loads the input CSV, sends every row to the completeness service in one
/// request and stores the service's answer.
pub fn run(config: &Config) -> Result<RunSummary> {
    let start_time = Instant::now();

    tracing::info!(path = %config.input_path.display(), "Loading rows");
    let rows = load_rows(&config.input_path)?;
    tracing::info!(rows = rows.len(), "Loaded rows");

    let request = build_request(&rows);
    if tracing::enabled!(tracing::Level::DEBUG) {
        match serde_json::to_string(&request) {
            Ok(body) => tracing::debug!(%body, "Built request body"),
            Err(e) => tracing::debug!(error = %e, "Could not render request body"),
        }
    }

    let client = CompletenessClient::new(config.base_url.clone())?;

    if config.check_status {
        match client.status() {
            Ok(status) if status.is_operational() => tracing::info!("Completeness service is operational"),
            Ok(status) => tracing::warn!(status = %status.status, "Completeness service reports unexpected status"),
            Err(e) => tracing::warn!(error = %e, "Status check failed"),
        }
    }

    let request_start = Instant::now();
    let response = client.run(&request)?;
    tracing::info!(elapsed = ?request_start.elapsed(), bytes = response.len(), "Received response");

    write_response(&config.output_path, &response)?;
    tracing::info!(
        path = %config.output_path.display(),
        elapsed = ?start_time.elapsed(),
        "Wrote response"
    );

    Ok(RunSummary {
        documents: request.dataset.documents.len(),
        response_bytes: response.len(),
        output_path: config.output_path.clone(),
    })
}
