// SPDX-FileCopyrightText: 2026 Visage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the visage face-swap bot.
//!
//! This crate provides the error type, common types, and the narrow trait
//! definitions used throughout the visage workspace. The conversation
//! workflow in `visage-agent` talks to every collaborator exclusively
//! through these traits.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::VisageError;
pub use types::{Conversation, ImageRole, Phase, PublishedImage, SwapOutcome, UserId};

pub use traits::{ImageAcquirer, ReplySink, SessionStore, SwapService};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visage_error_has_all_variants() {
        let _config = VisageError::Config("test".into());
        let _channel = VisageError::Channel {
            message: "test".into(),
            source: None,
        };
        let _download = VisageError::Download {
            message: "test".into(),
            source: Some(Box::new(std::io::Error::other("test"))),
        };
        let _creation = VisageError::TaskCreation("no task_id".into());
        let _swap = VisageError::Swap {
            message: "test".into(),
            source: None,
        };
        let _internal = VisageError::Internal("test".into());
    }

    #[test]
    fn error_display_includes_message() {
        let err = VisageError::Download {
            message: "connection reset".into(),
            source: None,
        };
        assert!(err.to_string().contains("connection reset"));
    }

    #[test]
    fn swap_outcome_variants() {
        let done = SwapOutcome::Completed("https://example.com/result.jpg".into());
        let timed_out = SwapOutcome::TimedOut;
        assert_ne!(done, timed_out);
    }
}
