// SPDX-FileCopyrightText: 2026 Visage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory session store.
//!
//! The only [`SessionStore`] implementation: a mutex-guarded map from
//! user id to conversation. Conversation state is deliberately not
//! persisted across process restarts.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;
use visage_core::traits::SessionStore;
use visage_core::types::{Conversation, UserId};

/// Mutex-guarded map of per-user conversations.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    sessions: Mutex<HashMap<UserId, Conversation>>,
}

impl MemorySessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of active conversations.
    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    /// True when no conversation is active.
    pub async fn is_empty(&self) -> bool {
        self.sessions.lock().await.is_empty()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self, user: &UserId) -> Option<Conversation> {
        self.sessions.lock().await.get(user).cloned()
    }

    async fn set(&self, user: &UserId, conversation: Conversation) {
        self.sessions
            .lock()
            .await
            .insert(user.clone(), conversation);
    }

    async fn delete(&self, user: &UserId) -> Option<Conversation> {
        self.sessions.lock().await.remove(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use visage_core::types::Phase;

    #[tokio::test]
    async fn get_returns_none_for_unknown_user() {
        let store = MemorySessionStore::new();
        assert!(store.get(&UserId("1".into())).await.is_none());
    }

    #[tokio::test]
    async fn set_then_get_round_trips() {
        let store = MemorySessionStore::new();
        let user = UserId("1".into());
        store.set(&user, Conversation::new()).await;

        let conv = store.get(&user).await.unwrap();
        assert_eq!(conv.phase, Phase::AwaitingTarget);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn set_overwrites_existing_conversation() {
        let store = MemorySessionStore::new();
        let user = UserId("1".into());

        let mut conv = Conversation::new();
        conv.phase = Phase::AwaitingFace;
        store.set(&user, conv).await;
        store.set(&user, Conversation::new()).await;

        assert_eq!(store.get(&user).await.unwrap().phase, Phase::AwaitingTarget);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn delete_removes_and_returns_conversation() {
        let store = MemorySessionStore::new();
        let user = UserId("1".into());
        store.set(&user, Conversation::new()).await;

        let removed = store.delete(&user).await;
        assert!(removed.is_some());
        assert!(store.get(&user).await.is_none());
        assert!(store.is_empty().await);

        // A second delete is a no-op.
        assert!(store.delete(&user).await.is_none());
    }

    #[tokio::test]
    async fn users_are_isolated() {
        let store = MemorySessionStore::new();
        let alice = UserId("1".into());
        let bob = UserId("2".into());
        store.set(&alice, Conversation::new()).await;

        assert!(store.get(&bob).await.is_none());
        store.delete(&bob).await;
        assert!(store.get(&alice).await.is_some());
    }
}
