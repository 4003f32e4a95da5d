// SPDX-FileCopyrightText: 2026 Visage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reply delivery bound to a single Telegram chat.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::InputFile;
use visage_core::error::VisageError;
use visage_core::traits::ReplySink;

/// [`ReplySink`] implementation sending into one Telegram chat.
///
/// Constructed per incoming update with the originating chat id bound.
pub struct TelegramReplySink {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramReplySink {
    /// Binds a sink to the chat an update originated from.
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }
}

#[async_trait]
impl ReplySink for TelegramReplySink {
    async fn text(&self, text: &str) -> Result<(), VisageError> {
        self.bot
            .send_message(self.chat_id, text)
            .await
            .map_err(|e| VisageError::Channel {
                message: format!("failed to send message: {e}"),
                source: Some(Box::new(e)),
            })?;
        Ok(())
    }

    async fn photo(&self, url: &str) -> Result<(), VisageError> {
        let parsed = url.parse::<url::Url>().map_err(|e| VisageError::Channel {
            message: format!("result URL is not valid: {e}"),
            source: Some(Box::new(e)),
        })?;

        self.bot
            .send_photo(self.chat_id, InputFile::url(parsed))
            .await
            .map_err(|e| VisageError::Channel {
                message: format!("failed to send photo: {e}"),
                source: Some(Box::new(e)),
            })?;
        Ok(())
    }
}
