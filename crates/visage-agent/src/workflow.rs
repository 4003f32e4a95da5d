// SPDX-FileCopyrightText: 2026 Visage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The face-swap conversation workflow.
//!
//! Each user walks through `AwaitingTarget -> AwaitingFace -> Processing`;
//! when the second image arrives the swap is submitted and awaited within
//! the same handling turn, the outcome is reported, and the conversation
//! state plus both temporary files are deleted regardless of outcome.
//!
//! All errors on the photo path are caught here, at the router boundary:
//! the user gets a generic failure notice, the state is deleted
//! unconditionally, and any files the state referenced are removed
//! best-effort. Every serviced event produces a reply; a user's turn is
//! never silent.

use std::sync::Arc;

use tracing::{info, warn};
use visage_core::error::VisageError;
use visage_core::traits::{ImageAcquirer, ReplySink, SessionStore, SwapService};
use visage_core::types::{Conversation, ImageRole, Phase, SwapOutcome, UserId};

/// Reply sent for `/start`.
pub const WELCOME_MESSAGE: &str = "\u{1f31f} Welcome to Face Swap Bot!\n\n\
    Please send the TARGET image (the main photo where we'll swap the face)";

/// Reply sent once the target image is stored.
pub const TARGET_RECEIVED_MESSAGE: &str =
    "\u{2705} Target image received! Now please send the FACE image you want to swap";

/// Reply sent while the swap task runs.
pub const PROCESSING_MESSAGE: &str = "\u{1f504} Processing your images...";

/// Reply sent when the swap service times out or reports no result.
pub const SWAP_FAILED_MESSAGE: &str =
    "\u{274c} Failed to process images. Please try again.";

/// Reply sent when any error is caught on the photo path.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "\u{274c} An error occurred. Please try again.";

/// Prompt for users without an active conversation.
pub const PROMPT_START_MESSAGE: &str = "Send /start to begin";

/// Prompt for non-photo messages inside an active conversation.
pub const PROMPT_IMAGE_MESSAGE: &str = "Please send an image as specified";

/// Reply for a photo arriving while a swap is already in flight.
pub const BUSY_MESSAGE: &str =
    "\u{23f3} Your previous images are still being processed, please wait";

/// Per-user conversation state machine and message router.
///
/// Owns the session store and talks to the image acquirer and swap
/// service exclusively through their traits, so tests can inject mocks.
pub struct SwapWorkflow {
    sessions: Arc<dyn SessionStore>,
    acquirer: Arc<dyn ImageAcquirer>,
    swap: Arc<dyn SwapService>,
}

impl SwapWorkflow {
    /// Creates a workflow over the given collaborators.
    pub fn new(
        sessions: Arc<dyn SessionStore>,
        acquirer: Arc<dyn ImageAcquirer>,
        swap: Arc<dyn SwapService>,
    ) -> Self {
        Self {
            sessions,
            acquirer,
            swap,
        }
    }

    /// Handles `/start`: resets the user's conversation to
    /// `AwaitingTarget`, silently discarding any in-flight progress, and
    /// sends the welcome instructions.
    pub async fn on_start(&self, user: &UserId, replies: &dyn ReplySink) {
        // Starting over abandons prior downloads; reclaim their files.
        if let Some(previous) = self.sessions.delete(user).await {
            self.remove_conversation_files(&previous).await;
        }
        self.sessions.set(user, Conversation::new()).await;
        info!(user = %user, "conversation started");

        if let Err(e) = replies.text(WELCOME_MESSAGE).await {
            warn!(user = %user, error = %e, "failed to send welcome reply");
        }
    }

    /// Handles an incoming photo according to the user's current phase.
    ///
    /// Any error is caught here: generic failure notice, unconditional
    /// state deletion, best-effort file cleanup.
    pub async fn on_photo(&self, user: &UserId, remote_file_url: &str, replies: &dyn ReplySink) {
        let Some(conversation) = self.sessions.get(user).await else {
            if let Err(e) = replies.text(PROMPT_START_MESSAGE).await {
                warn!(user = %user, error = %e, "failed to send start prompt");
            }
            return;
        };

        let result = match conversation.phase {
            Phase::AwaitingTarget => self.collect_target(user, remote_file_url, replies).await,
            Phase::AwaitingFace => {
                self.collect_face_and_swap(user, conversation, remote_file_url, replies)
                    .await
            }
            Phase::Processing => {
                if let Err(e) = replies.text(BUSY_MESSAGE).await {
                    warn!(user = %user, error = %e, "failed to send busy reply");
                }
                Ok(())
            }
        };

        if let Err(e) = result {
            warn!(user = %user, error = %e, "photo handling failed");
            self.on_failure(user, replies).await;
        }
    }

    /// Terminal failure handling: deletes the user's conversation,
    /// reclaims any files it referenced, and sends the generic failure
    /// notice. Also used by channel adapters when an event fails before
    /// it reaches the workflow (e.g. file resolution).
    pub async fn on_failure(&self, user: &UserId, replies: &dyn ReplySink) {
        self.abort(user).await;
        if let Err(e) = replies.text(GENERIC_FAILURE_MESSAGE).await {
            warn!(user = %user, error = %e, "failed to send failure notice");
        }
    }

    /// Handles any non-photo, non-command message: prompts for an image
    /// when a conversation exists, otherwise prompts to start.
    pub async fn on_other(&self, user: &UserId, replies: &dyn ReplySink) {
        let prompt = if self.sessions.get(user).await.is_some() {
            PROMPT_IMAGE_MESSAGE
        } else {
            PROMPT_START_MESSAGE
        };
        if let Err(e) = replies.text(prompt).await {
            warn!(user = %user, error = %e, "failed to send prompt reply");
        }
    }

    /// `AwaitingTarget` + photo: acquire as target, advance to
    /// `AwaitingFace`.
    async fn collect_target(
        &self,
        user: &UserId,
        remote_file_url: &str,
        replies: &dyn ReplySink,
    ) -> Result<(), VisageError> {
        let target = self
            .acquirer
            .acquire(remote_file_url, user, ImageRole::Target)
            .await?;

        self.sessions
            .set(
                user,
                Conversation {
                    phase: Phase::AwaitingFace,
                    target: Some(target),
                    face: None,
                },
            )
            .await;

        replies.text(TARGET_RECEIVED_MESSAGE).await
    }

    /// `AwaitingFace` + photo: acquire as face, advance to `Processing`,
    /// run the swap synchronously, report the outcome, then delete the
    /// state and both temporary files regardless of outcome.
    async fn collect_face_and_swap(
        &self,
        user: &UserId,
        conversation: Conversation,
        remote_file_url: &str,
        replies: &dyn ReplySink,
    ) -> Result<(), VisageError> {
        let target = conversation.target.ok_or_else(|| {
            VisageError::Internal("awaiting_face conversation has no stored target".into())
        })?;

        let face = self
            .acquirer
            .acquire(remote_file_url, user, ImageRole::Face)
            .await?;

        self.sessions
            .set(
                user,
                Conversation {
                    phase: Phase::Processing,
                    target: Some(target.clone()),
                    face: Some(face.clone()),
                },
            )
            .await;

        replies.text(PROCESSING_MESSAGE).await?;

        let outcome = self.swap.submit_and_await(&target.url, &face.url).await;

        // Terminal either way: the conversation and both files go away.
        self.sessions.delete(user).await;
        self.acquirer.remove(&target).await;
        self.acquirer.remove(&face).await;

        match outcome? {
            SwapOutcome::Completed(result_url) => {
                info!(user = %user, "swap completed");
                replies.photo(&result_url).await
            }
            SwapOutcome::TimedOut => replies.text(SWAP_FAILED_MESSAGE).await,
        }
    }

    /// Deletes the user's conversation and removes any files it
    /// referenced. Safe to call when no conversation exists.
    async fn abort(&self, user: &UserId) {
        if let Some(conversation) = self.sessions.delete(user).await {
            self.remove_conversation_files(&conversation).await;
        }
    }

    async fn remove_conversation_files(&self, conversation: &Conversation) {
        if let Some(ref target) = conversation.target {
            self.acquirer.remove(target).await;
        }
        if let Some(ref face) = conversation.face {
            self.acquirer.remove(face).await;
        }
    }
}
