// SPDX-FileCopyrightText: 2026 Visage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Telegram channel adapter for the visage face-swap bot.
//!
//! Connects to Telegram via teloxide long polling and routes each update
//! into the conversation workflow: `/start` commands, photo messages,
//! and informational replies for everything else.

pub mod handler;
pub mod media;
pub mod sink;

use std::sync::Arc;

use teloxide::prelude::*;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};
use visage_agent::SwapWorkflow;
use visage_config::model::TelegramConfig;
use visage_core::error::VisageError;

use crate::sink::TelegramReplySink;

/// Telegram channel adapter.
///
/// Owns the teloxide `Bot` and drives the long-polling dispatcher,
/// handing every private-chat update to the [`SwapWorkflow`].
pub struct TelegramChannel {
    bot: Bot,
}

impl TelegramChannel {
    /// Creates a new Telegram channel adapter.
    ///
    /// Requires `config.bot_token` to be set.
    pub fn new(config: &TelegramConfig) -> Result<Self, VisageError> {
        let token = config.bot_token.as_deref().ok_or_else(|| {
            VisageError::Config("telegram.bot_token is required to serve".into())
        })?;

        if token.is_empty() {
            return Err(VisageError::Config(
                "telegram.bot_token cannot be empty".into(),
            ));
        }

        Ok(Self {
            bot: Bot::new(token),
        })
    }

    /// Returns a reference to the underlying teloxide Bot.
    pub fn bot(&self) -> &Bot {
        &self.bot
    }

    /// Runs the long-polling dispatcher until `cancel` fires.
    pub async fn run(self, workflow: Arc<SwapWorkflow>, cancel: CancellationToken) {
        let handler = Update::filter_message().endpoint(move |bot: Bot, msg: Message| {
            let workflow = workflow.clone();
            async move {
                handle_update(&bot, &workflow, &msg).await;
                respond(())
            }
        });

        let mut dispatcher = Dispatcher::builder(self.bot, handler)
            .default_handler(|_| async {}) // Silently ignore non-message updates
            .build();

        let shutdown_token = dispatcher.shutdown_token();
        tokio::spawn(async move {
            cancel.cancelled().await;
            if let Ok(finished) = shutdown_token.shutdown() {
                finished.await;
            }
        });

        info!("starting Telegram long polling");
        dispatcher.dispatch().await;
        info!("Telegram dispatcher stopped");
    }
}

/// Routes one incoming message into the workflow.
async fn handle_update(bot: &Bot, workflow: &SwapWorkflow, msg: &Message) {
    if !handler::is_dm(msg) {
        debug!(chat_id = msg.chat.id.0, "ignoring non-DM message");
        return;
    }

    let Some(user) = handler::sender(msg) else {
        debug!(chat_id = msg.chat.id.0, "ignoring message without sender");
        return;
    };

    let sink = TelegramReplySink::new(bot.clone(), msg.chat.id);

    if let Some(photos) = msg.photo() {
        match media::photo_file_url(bot, photos).await {
            Ok(remote_url) => workflow.on_photo(&user, &remote_url, &sink).await,
            Err(e) => {
                error!(user = %user, error = %e, "failed to resolve photo file");
                workflow.on_failure(&user, &sink).await;
            }
        }
    } else if let Some(text) = msg.text() {
        if handler::is_start_command(text) {
            workflow.on_start(&user, &sink).await;
        } else {
            workflow.on_other(&user, &sink).await;
        }
    } else {
        // Stickers, voice notes, locations... all get the same prompt.
        workflow.on_other(&user, &sink).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_requires_bot_token() {
        let config = TelegramConfig { bot_token: None };
        assert!(TelegramChannel::new(&config).is_err());
    }

    #[test]
    fn new_rejects_empty_token() {
        let config = TelegramConfig {
            bot_token: Some(String::new()),
        };
        assert!(TelegramChannel::new(&config).is_err());
    }

    #[test]
    fn new_accepts_valid_token() {
        let config = TelegramConfig {
            bot_token: Some("123456:ABC-DEF1234ghIkl-zyx57W2v1u123ew11".into()),
        };
        assert!(TelegramChannel::new(&config).is_ok());
    }
}
