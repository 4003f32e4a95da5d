// SPDX-FileCopyrightText: 2026 Visage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types used across the visage workspace.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Channel-agnostic identifier for a chat user.
///
/// The Telegram adapter stringifies the numeric Telegram user id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The role an acquired image plays in a swap: the scene photo or the face
/// to graft into it. Used in published filenames and log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageRole {
    Target,
    Face,
}

impl std::fmt::Display for ImageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageRole::Target => write!(f, "target"),
            ImageRole::Face => write!(f, "face"),
        }
    }
}

/// A conversation's position in the two-image collection workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the scene photo.
    AwaitingTarget,
    /// Target stored, waiting for the face photo.
    AwaitingFace,
    /// Both images collected, swap in flight.
    Processing,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::AwaitingTarget => write!(f, "awaiting_target"),
            Phase::AwaitingFace => write!(f, "awaiting_face"),
            Phase::Processing => write!(f, "processing"),
        }
    }
}

/// A downloaded image republished under the local static file host.
///
/// Invariant: while the record exists, `url` resolves to exactly the file
/// at `path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedImage {
    /// Publicly reachable URL under the static file host.
    pub url: String,
    /// On-disk file backing the URL.
    pub path: PathBuf,
}

/// Per-user conversation state.
///
/// At most one exists per [`UserId`] at any time; absence means the user
/// has not started or has just completed/aborted a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    pub phase: Phase,
    pub target: Option<PublishedImage>,
    pub face: Option<PublishedImage>,
}

impl Conversation {
    /// A fresh conversation at the start of the workflow.
    pub fn new() -> Self {
        Self {
            phase: Phase::AwaitingTarget,
            target: None,
            face: None,
        }
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

/// Terminal outcome of a swap task submission.
///
/// `TimedOut` is a value, not an error: exhausting the poll budget is an
/// expected outcome that produces a user-facing failure message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwapOutcome {
    /// The service produced a result image at this URL.
    Completed(String),
    /// The poll attempt budget was exhausted without a result.
    TimedOut,
}
