// SPDX-FileCopyrightText: 2026 Campus Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.

use crate::diagnostic::ConfigError;
use crate::model::CampusConfig;

/// Validate a deserialized configuration for semantic correctness.
///
/// Collects every failure rather than stopping at the first one.
pub fn validate_config(config: &CampusConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let base_url = config.ai.base_url.trim();
    if base_url.is_empty() {
        errors.push(ConfigError::Validation {
            message: "ai.base_url must not be empty".to_string(),
        });
    } else if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        errors.push(ConfigError::Validation {
            message: format!("ai.base_url `{base_url}` must start with http:// or https://"),
        });
    }

    if config.ai.timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "ai.timeout_secs must be at least 1".to_string(),
        });
    }

    if config.cache.ttl_ms == 0 {
        errors.push(ConfigError::Validation {
            message: "cache.ttl_ms must be at least 1".to_string(),
        });
    }

    if config.cache.max_entries == 0 {
        errors.push(ConfigError::Validation {
            message: "cache.max_entries must be at least 1".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
