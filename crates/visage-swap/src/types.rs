// SPDX-FileCopyrightText: 2026 Visage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wire types for the face-swap service API.
//!
//! The service is query-parameter driven and responds with small JSON
//! objects. Responses are deserialized into these models so that missing
//! or malformed fields surface as typed errors at the service boundary
//! instead of leaking into the workflow.

use serde::Deserialize;

/// Response to a `function=create_task` request.
#[derive(Debug, Deserialize)]
pub struct CreateTaskResponse {
    /// Opaque identifier of the created swap task. Absence means the
    /// service rejected the request.
    #[serde(default)]
    pub task_id: Option<String>,
}

/// Response to a `function=check_task` request.
#[derive(Debug, Deserialize)]
pub struct CheckTaskResponse {
    /// URL of the finished result image. Absence means the task is still
    /// processing.
    #[serde(default)]
    pub result: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_response_parses_task_id() {
        let resp: CreateTaskResponse =
            serde_json::from_str(r#"{"task_id":"abc123"}"#).unwrap();
        assert_eq!(resp.task_id.as_deref(), Some("abc123"));
    }

    #[test]
    fn create_response_tolerates_missing_task_id() {
        let resp: CreateTaskResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.task_id.is_none());
    }

    #[test]
    fn check_response_without_result_means_pending() {
        let resp: CheckTaskResponse =
            serde_json::from_str(r#"{"status":"processing"}"#).unwrap();
        assert!(resp.result.is_none());
    }

    #[test]
    fn check_response_with_result() {
        let resp: CheckTaskResponse =
            serde_json::from_str(r#"{"result":"https://cdn.example.com/out.jpg"}"#).unwrap();
        assert_eq!(
            resp.result.as_deref(),
            Some("https://cdn.example.com/out.jpg")
        );
    }
}
