// SPDX-FileCopyrightText: 2026 Visage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Photo file resolution for Telegram messages.
//!
//! Resolves the largest variant of an incoming photo to a fetchable
//! Bot API file URL, which the image acquirer then streams to disk.

use teloxide::prelude::*;
use teloxide::types::PhotoSize;
use tracing::debug;
use visage_core::error::VisageError;

/// Picks the largest available photo variant.
///
/// Telegram provides multiple sizes; the last one is the largest.
pub fn largest_photo(photos: &[PhotoSize]) -> Result<&PhotoSize, VisageError> {
    photos.last().ok_or_else(|| VisageError::Channel {
        message: "photo array is empty".into(),
        source: None,
    })
}

/// Builds the Bot API download URL for a resolved file path.
pub fn file_url(token: &str, file_path: &str) -> String {
    format!("https://api.telegram.org/file/bot{token}/{file_path}")
}

/// Resolves a photo message to a fetchable remote file URL.
///
/// Uses the Bot API's `getFile` to resolve the file path of the largest
/// photo variant, then constructs the download URL.
pub async fn photo_file_url(bot: &Bot, photos: &[PhotoSize]) -> Result<String, VisageError> {
    let largest = largest_photo(photos)?;

    let file = bot
        .get_file(largest.file.id.clone())
        .await
        .map_err(|e| VisageError::Channel {
            message: format!("failed to resolve photo file: {e}"),
            source: Some(Box::new(e)),
        })?;

    debug!(
        file_id = %largest.file.id,
        size = largest.file.size,
        "resolved photo file path"
    );

    Ok(file_url(bot.token(), &file.path))
}
