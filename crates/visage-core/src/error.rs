// SPDX-FileCopyrightText: 2026 Visage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the visage face-swap bot.

use thiserror::Error;

/// The primary error type used across all visage crates.
///
/// A poll timeout is deliberately not an error; see
/// [`SwapOutcome::TimedOut`](crate::types::SwapOutcome).
#[derive(Debug, Error)]
pub enum VisageError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Chat transport errors (Telegram API failure, reply delivery, file resolution).
    #[error("channel error: {message}")]
    Channel {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Remote image fetch or local write failure while acquiring an image.
    #[error("download error: {message}")]
    Download {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The swap service did not return a usable task identifier.
    #[error("task creation failed: {0}")]
    TaskCreation(String),

    /// Swap service transport or malformed-response errors.
    #[error("swap service error: {message}")]
    Swap {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
