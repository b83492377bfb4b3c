use crate::error::{EnrichError, Result};
use crate::term::{SearchResponse, SubmitReply, TaskStatus};
use reqwest::{Client, StatusCode};
use serde_json::json;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Client for the iQuery integrated search REST service.
///
/// Submits an enrichment job, polls its status endpoint at a fixed
/// interval, and fetches the completed payload.
pub struct EnrichmentClient {
    client: Client,
    base_url: String,
    polling_interval: f64,
    retry_count: u32,
}

impl EnrichmentClient {
    pub fn new(base_url: &Url) -> Self {
        Self::with_timeout(base_url, 30)
    }

    pub fn with_timeout(base_url: &Url, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .user_agent(concat!("cyquery/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
            polling_interval: 1.0,
            retry_count: 180,
        }
    }

    /// Seconds to wait between status checks. No backoff.
    pub fn with_polling_interval(mut self, seconds: f64) -> Self {
        self.polling_interval = seconds;
        self
    }

    pub fn with_retry_count(mut self, retry_count: u32) -> Self {
        self.retry_count = retry_count;
        self
    }

    /// Submits a gene list for enrichment and returns the task id.
    ///
    /// The service acknowledges an accepted job with 202; anything else
    /// is an [`EnrichError::UnexpectedStatus`] carrying the body text.
    pub async fn submit(&self, genes: &[String]) -> Result<String> {
        let query = json!({
            "geneList": genes,
            "sourceList": ["enrichment"],
        });

        debug!("Submitting {} genes to {}", genes.len(), self.base_url);
        let res = self
            .client
            .post(format!("{}/integratedsearch/v1/", self.base_url))
            .json(&query)
            .send()
            .await?;

        let status = res.status();
        if status != StatusCode::ACCEPTED {
            let body = res.text().await.unwrap_or_default();
            return Err(EnrichError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        let reply: SubmitReply = res.json().await?;
        Ok(reply.id)
    }

    /// Polls the status endpoint until the task reports 100% progress,
    /// bounded by the configured retry count.
    ///
    /// Returns `Ok(true)` once progress hits 100 with status "complete"
    /// and `Ok(false)` either on a terminal non-complete status or after
    /// exhausting all attempts. Transport errors and HTTP error codes
    /// while polling count as retries rather than aborting the loop.
    pub async fn wait_for_completion(&self, task_id: &str) -> Result<bool> {
        let status_url = format!("{}/integratedsearch/v1/{}/status", self.base_url, task_id);

        let mut attempts = 0u32;
        while attempts < self.retry_count {
            match self.client.get(&status_url).send().await {
                Ok(res) if res.status() == StatusCode::OK => {
                    match res.json::<TaskStatus>().await {
                        Ok(task) => {
                            if task.progress == 100 {
                                if task.status != "complete" {
                                    warn!(
                                        "Task {} finished with status '{}'",
                                        task_id, task.status
                                    );
                                    return Ok(false);
                                }
                                return Ok(true);
                            }
                            debug!("Task {} at {}%", task_id, task.progress);
                        }
                        Err(e) => {
                            warn!("Undecodable status body while polling: {}", e);
                        }
                    }
                }
                Ok(res) => {
                    warn!(
                        "Received error {} while polling for completion",
                        res.status()
                    );
                }
                Err(e) => {
                    warn!("Received exception waiting for task completion: {}", e);
                }
            }

            attempts += 1;
            if attempts < self.retry_count {
                tokio::time::sleep(Duration::from_secs_f64(self.polling_interval)).await;
            }
        }

        Ok(false)
    }

    /// Fetches the completed result payload for a task.
    pub async fn fetch_result(&self, task_id: &str) -> Result<SearchResponse> {
        let res = self
            .client
            .get(format!("{}/integratedsearch/v1/{}", self.base_url, task_id))
            .send()
            .await?;

        let status = res.status();
        if status != StatusCode::OK {
            let body = res.text().await.unwrap_or_default();
            return Err(EnrichError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(res.json().await?)
    }
}
