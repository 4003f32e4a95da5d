// SPDX-FileCopyrightText: 2026 Visage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the remote face-swap service.
//!
//! Provides [`SwapClient`] which submits a create-task request and then
//! polls the check-task endpoint until a result is available or the
//! attempt budget is exhausted.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info};
use visage_config::model::SwapConfig;
use visage_core::error::VisageError;
use visage_core::traits::SwapService;
use visage_core::types::SwapOutcome;

use crate::types::{CheckTaskResponse, CreateTaskResponse};

/// Per-request timeout for swap service calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the face-swap service.
///
/// The service exposes a single endpoint driven by a `function` query
/// parameter: `create_task` returns a task identifier, `check_task`
/// reports whether a result is ready. Polling is strictly sequential and
/// the delay precedes every status check, including the first.
#[derive(Debug, Clone)]
pub struct SwapClient {
    client: reqwest::Client,
    base_url: String,
    poll_interval: Duration,
    max_poll_attempts: u32,
}

impl SwapClient {
    /// Creates a new swap service client from configuration.
    pub fn new(config: &SwapConfig) -> Result<Self, VisageError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| VisageError::Swap {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            base_url: config.api_url.clone(),
            poll_interval: Duration::from_secs(config.poll_interval_secs),
            max_poll_attempts: config.max_poll_attempts,
        })
    }

    /// Overrides the base URL (for testing with wiremock).
    #[cfg(test)]
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }

    /// Overrides the poll interval (for testing with millisecond delays).
    #[cfg(test)]
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Submits a create-task request and returns the task identifier.
    async fn create_task(
        &self,
        target_url: &str,
        face_url: &str,
    ) -> Result<String, VisageError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("function", "create_task"),
                ("target_img", target_url),
                ("face_img", face_url),
            ])
            .send()
            .await
            .map_err(|e| VisageError::Swap {
                message: format!("create_task request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(VisageError::Swap {
                message: format!("create_task returned {status}: {body}"),
                source: None,
            });
        }

        let body = response.text().await.map_err(|e| VisageError::Swap {
            message: format!("failed to read create_task response body: {e}"),
            source: Some(Box::new(e)),
        })?;
        let parsed: CreateTaskResponse =
            serde_json::from_str(&body).map_err(|e| VisageError::Swap {
                message: format!("malformed create_task response: {e}"),
                source: Some(Box::new(e)),
            })?;

        match parsed.task_id {
            Some(id) if !id.is_empty() => Ok(id),
            _ => Err(VisageError::TaskCreation(
                "service did not return a task_id".into(),
            )),
        }
    }

    /// Queries the status of a task. `Ok(None)` means "not yet ready".
    async fn check_task(&self, task_id: &str) -> Result<Option<String>, VisageError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("function", "check_task"), ("task_id", task_id)])
            .send()
            .await
            .map_err(|e| VisageError::Swap {
                message: format!("check_task request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(VisageError::Swap {
                message: format!("check_task returned {status}: {body}"),
                source: None,
            });
        }

        let body = response.text().await.map_err(|e| VisageError::Swap {
            message: format!("failed to read check_task response body: {e}"),
            source: Some(Box::new(e)),
        })?;
        let parsed: CheckTaskResponse =
            serde_json::from_str(&body).map_err(|e| VisageError::Swap {
                message: format!("malformed check_task response: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(parsed.result)
    }
}

#[async_trait]
impl SwapService for SwapClient {
    async fn submit_and_await(
        &self,
        target_url: &str,
        face_url: &str,
    ) -> Result<SwapOutcome, VisageError> {
        let task_id = self.create_task(target_url, face_url).await?;
        info!(task_id = task_id.as_str(), "swap task created");

        for attempt in 1..=self.max_poll_attempts {
            // The delay precedes every check, including the first.
            tokio::time::sleep(self.poll_interval).await;

            if let Some(result) = self.check_task(&task_id).await? {
                info!(
                    task_id = task_id.as_str(),
                    attempt, "swap task completed"
                );
                return Ok(SwapOutcome::Completed(result));
            }

            debug!(task_id = task_id.as_str(), attempt, "result not ready");
        }

        info!(
            task_id = task_id.as_str(),
            attempts = self.max_poll_attempts,
            "swap task timed out"
        );
        Ok(SwapOutcome::TimedOut)
    }
}
