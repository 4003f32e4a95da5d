// SPDX-FileCopyrightText: 2026 Visage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./visage.toml` > `~/.config/visage/visage.toml`
//! > `/etc/visage/visage.toml` with environment variable overrides via the
//! `VISAGE_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::VisageConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/visage/visage.toml` (system-wide)
/// 3. `~/.config/visage/visage.toml` (user XDG config)
/// 4. `./visage.toml` (local directory)
/// 5. `VISAGE_*` environment variables
pub fn load_config() -> Result<VisageConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(VisageConfig::default()))
        .merge(Toml::file("/etc/visage/visage.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("visage/visage.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("visage.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a specific TOML string only (no XDG lookup).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<VisageConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(VisageConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<VisageConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(VisageConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `VISAGE_TELEGRAM_BOT_TOKEN` must map
/// to `telegram.bot_token`, not `telegram.bot.token`.
fn env_provider() -> Env {
    Env::prefixed("VISAGE_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: VISAGE_SERVER_PUBLIC_URL -> "server_public_url"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("agent_", "agent.", 1)
            .replacen("telegram_", "telegram.", 1)
            .replacen("server_", "server.", 1)
            .replacen("swap_", "swap.", 1)
            .replacen("images_", "images.", 1);
        mapped.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_from_str_with_defaults() {
        let config = load_config_from_str("").unwrap();
        assert_eq!(config.agent.name, "visage");
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn load_from_str_overrides_defaults() {
        let config = load_config_from_str(
            r#"
[server]
port = 8080
public_url = "https://images.example.com"

[swap]
max_poll_attempts = 3
"#,
        )
        .unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(
            config.server.public_url.as_deref(),
            Some("https://images.example.com")
        );
        assert_eq!(config.swap.max_poll_attempts, 3);
        // Untouched sections keep defaults.
        assert_eq!(config.swap.poll_interval_secs, 2);
    }

    #[test]
    fn load_from_str_rejects_unknown_key() {
        let result = load_config_from_str(
            r#"
[swap]
api_ur = "https://example.com"
"#,
        );
        assert!(result.is_err());
    }
}
