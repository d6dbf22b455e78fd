//! Schedule endpoint client.

use std::time::Duration;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{debug, error};

/// Client for the club schedule endpoint. One GET per run; no retries,
/// no backoff, no pagination.
#[derive(Debug, Clone)]
pub struct ScheduleApi {
    client: reqwest::Client,
    timeout: Duration,
}

impl Default for ScheduleApi {
    fn default() -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("rinkcal/0.1 (schedule exporter)")
                .build()
                .unwrap_or_default(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl ScheduleApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch and parse the schedule at `url`.
    ///
    /// Transport-level failures (connect errors, timeouts, non-2xx
    /// statuses) are logged and reported as `None` so the caller can end
    /// the run without writing anything. A 200 body that is not valid
    /// JSON is an error and aborts the run.
    pub async fn fetch_schedule(&self, url: &str) -> Result<Option<Value>> {
        debug!(url, "requesting schedule");

        let response = match self.client.get(url).timeout(self.timeout).send().await {
            Ok(response) => response,
            Err(e) => {
                error!("Request to {url} failed: {e}");
                return Ok(None);
            }
        };

        let response = match response.error_for_status() {
            Ok(response) => response,
            Err(e) => {
                error!("Schedule endpoint rejected {url}: {e}");
                return Ok(None);
            }
        };

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                error!("Failed to read response body from {url}: {e}");
                return Ok(None);
            }
        };

        let raw: Value = serde_json::from_str(&body)
            .with_context(|| format!("Schedule response from {url} is not valid JSON"))?;

        debug!(bytes = body.len(), "schedule response parsed");
        Ok(Some(raw))
    }
}
