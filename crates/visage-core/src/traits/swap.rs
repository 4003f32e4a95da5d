// SPDX-FileCopyrightText: 2026 Visage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Remote face-swap service client interface.

use async_trait::async_trait;

use crate::error::VisageError;
use crate::types::SwapOutcome;

/// Submits a swap task and polls the remote service for its result.
#[async_trait]
pub trait SwapService: Send + Sync {
    /// Creates a swap task from two published image URLs and polls until
    /// a result is available or the attempt budget is exhausted.
    ///
    /// Exhausting the budget yields `Ok(SwapOutcome::TimedOut)`, not an
    /// error; errors are reserved for task creation and transport
    /// failures.
    async fn submit_and_await(
        &self,
        target_url: &str,
        face_url: &str,
    ) -> Result<SwapOutcome, VisageError>;
}
