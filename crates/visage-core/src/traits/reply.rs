// SPDX-FileCopyrightText: 2026 Visage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reply delivery for a single chat event.

use async_trait::async_trait;

use crate::error::VisageError;

/// Delivers replies to the user whose event is currently being handled.
///
/// A sink is scoped to one incoming event; the channel adapter constructs
/// one per update with the originating chat already bound.
#[async_trait]
pub trait ReplySink: Send + Sync {
    /// Sends a plain text reply.
    async fn text(&self, text: &str) -> Result<(), VisageError>;

    /// Sends a photo reply by URL; the chat platform fetches the image.
    async fn photo(&self, url: &str) -> Result<(), VisageError>;
}
