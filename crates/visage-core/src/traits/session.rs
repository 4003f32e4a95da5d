// SPDX-FileCopyrightText: 2026 Visage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-user conversation state store.

use async_trait::async_trait;

use crate::types::{Conversation, UserId};

/// Narrow interface over the user-id-to-conversation mapping.
///
/// Individual operations are atomic, but the store does not serialize two
/// rapid events from one user across suspension points; callers that need
/// per-user mutual exclusion must layer it on top.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns the user's current conversation, if one exists.
    async fn get(&self, user: &UserId) -> Option<Conversation>;

    /// Inserts or replaces the user's conversation.
    async fn set(&self, user: &UserId, conversation: Conversation);

    /// Removes and returns the user's conversation, if one existed.
    async fn delete(&self, user: &UserId) -> Option<Conversation>;
}
