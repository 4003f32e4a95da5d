// SPDX-FileCopyrightText: 2026 Visage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as valid bind addresses and non-zero poll budgets.

use crate::diagnostic::ConfigError;
use crate::model::VisageConfig;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)`
/// with all collected validation errors (does not fail fast).
pub fn validate_config(config: &VisageConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    // Validate server.host is not empty and looks like an IP or hostname.
    let host = config.server.host.trim();
    if host.is_empty() {
        errors.push(ConfigError::Validation {
            message: "server.host must not be empty".to_string(),
        });
    } else {
        let is_valid_ip = host.parse::<std::net::IpAddr>().is_ok();
        let is_valid_hostname = host
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == ':');
        if !is_valid_ip && !is_valid_hostname {
            errors.push(ConfigError::Validation {
                message: format!("server.host `{host}` is not a valid IP address or hostname"),
            });
        }
    }

    // Validate public_url, when set, is an absolute HTTP(S) URL.
    if let Some(ref public_url) = config.server.public_url
        && !public_url.starts_with("http://")
        && !public_url.starts_with("https://")
    {
        errors.push(ConfigError::Validation {
            message: format!(
                "server.public_url must be an absolute http(s) URL, got `{public_url}`"
            ),
        });
    }

    // Validate swap.api_url is an absolute HTTP(S) URL.
    if !config.swap.api_url.starts_with("http://") && !config.swap.api_url.starts_with("https://")
    {
        errors.push(ConfigError::Validation {
            message: format!(
                "swap.api_url must be an absolute http(s) URL, got `{}`",
                config.swap.api_url
            ),
        });
    }

    // Validate the poll budget is non-degenerate.
    if config.swap.max_poll_attempts == 0 {
        errors.push(ConfigError::Validation {
            message: "swap.max_poll_attempts must be at least 1".to_string(),
        });
    }

    // Validate images.dir is not empty.
    if config.images.dir.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "images.dir must not be empty".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        let config = VisageConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn empty_host_fails_validation() {
        let mut config = VisageConfig::default();
        config.server.host = "".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("server.host"))));
    }

    #[test]
    fn relative_public_url_fails_validation() {
        let mut config = VisageConfig::default();
        config.server.public_url = Some("bot.example.com".to_string());
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("public_url"))));
    }

    #[test]
    fn zero_poll_attempts_fails_validation() {
        let mut config = VisageConfig::default();
        config.swap.max_poll_attempts = 0;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("max_poll_attempts"))));
    }

    #[test]
    fn empty_images_dir_fails_validation() {
        let mut config = VisageConfig::default();
        config.images.dir = "  ".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("images.dir"))));
    }

    #[test]
    fn valid_custom_config_passes() {
        let mut config = VisageConfig::default();
        config.server.host = "127.0.0.1".to_string();
        config.server.public_url = Some("https://bot.example.com".to_string());
        config.telegram.bot_token = Some("123456:ABC".to_string());
        assert!(validate_config(&config).is_ok());
    }
}
