// SPDX-FileCopyrightText: 2026 Visage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Image acquisition: download a remote file and republish it locally.

use async_trait::async_trait;

use crate::error::VisageError;
use crate::types::{ImageRole, PublishedImage, UserId};

/// Downloads remote images and republishes them under the local static
/// file host.
#[async_trait]
pub trait ImageAcquirer: Send + Sync {
    /// Streams `remote_url` to a locally unique file and returns its
    /// published record. The write is fully flushed before returning.
    ///
    /// On failure a partial file may remain; cleanup is the caller's
    /// responsibility.
    async fn acquire(
        &self,
        remote_url: &str,
        user: &UserId,
        role: ImageRole,
    ) -> Result<PublishedImage, VisageError>;

    /// Removes the file backing a published image. Best-effort: failures
    /// are logged and never propagated.
    async fn remove(&self, image: &PublishedImage);
}
