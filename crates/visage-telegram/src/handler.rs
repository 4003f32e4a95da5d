// SPDX-FileCopyrightText: 2026 Visage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Message classification and sender extraction.
//!
//! Determines how an incoming Telegram message should be routed into the
//! workflow: start command, photo, or anything else.

use teloxide::prelude::*;
use teloxide::types::ChatKind;
use visage_core::types::UserId;

/// Checks whether the message is from a private (DM) chat.
///
/// Group, supergroup, and channel messages return `false`; the per-user
/// session map keys on the sender, so group traffic would cross-
/// contaminate conversations.
pub fn is_dm(msg: &Message) -> bool {
    matches!(msg.chat.kind, ChatKind::Private(_))
}

/// Checks whether a text message is the `/start` command.
///
/// Accepts the bare command, the `/start@botname` form used in some
/// clients, and trailing arguments.
pub fn is_start_command(text: &str) -> bool {
    let first = text.trim().split_whitespace().next().unwrap_or("");
    first == "/start" || first.starts_with("/start@")
}

/// Extracts the sender as a channel-agnostic [`UserId`].
///
/// Messages without a sender (e.g. channel posts) return `None`.
pub fn sender(msg: &Message) -> Option<UserId> {
    msg.from.as_ref().map(|u| UserId(u.id.0.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a mock private chat message from JSON, matching Telegram Bot
    /// API structure.
    fn make_private_message(user_id: u64, text: &str) -> Message {
        let json = serde_json::json!({
            "message_id": 1,
            "date": 1700000000i64,
            "chat": {
                "id": user_id as i64,
                "type": "private",
                "first_name": "Test",
            },
            "from": {
                "id": user_id,
                "is_bot": false,
                "first_name": "Test",
            },
            "text": text,
        });

        serde_json::from_value(json).expect("failed to deserialize mock message")
    }

    /// Build a mock group chat message.
    fn make_group_message(user_id: u64, text: &str) -> Message {
        let json = serde_json::json!({
            "message_id": 1,
            "date": 1700000000i64,
            "chat": {
                "id": -100123i64,
                "type": "supergroup",
                "title": "Test Group",
            },
            "from": {
                "id": user_id,
                "is_bot": false,
                "first_name": "Test",
            },
            "text": text,
        });

        serde_json::from_value(json).expect("failed to deserialize mock group message")
    }

    #[test]
    fn is_dm_private_chat() {
        let msg = make_private_message(12345, "hello");
        assert!(is_dm(&msg));
    }

    #[test]
    fn is_dm_group_chat() {
        let msg = make_group_message(12345, "hello");
        assert!(!is_dm(&msg));
    }

    #[test]
    fn start_command_variants() {
        assert!(is_start_command("/start"));
        assert!(is_start_command("  /start  "));
        assert!(is_start_command("/start@visage_bot"));
        assert!(is_start_command("/start deep-link-payload"));
        assert!(!is_start_command("/help"));
        assert!(!is_start_command("start"));
        assert!(!is_start_command("please /start"));
    }

    #[test]
    fn sender_extracts_user_id() {
        let msg = make_private_message(12345, "hello");
        assert_eq!(sender(&msg), Some(UserId("12345".into())));
    }

    #[test]
    fn sender_is_none_without_from() {
        let json = serde_json::json!({
            "message_id": 1,
            "date": 1700000000i64,
            "chat": {
                "id": 12345i64,
                "type": "private",
                "first_name": "Test",
            },
            "text": "hello",
        });
        let msg: Message = serde_json::from_value(json).unwrap();
        assert!(sender(&msg).is_none());
    }
}
