// SPDX-FileCopyrightText: 2026 Campus Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./campus.toml` > `~/.config/campus/campus.toml` > `/etc/campus/campus.toml`
//! with environment variable overrides via the `CAMPUS_` prefix and the
//! legacy `AI_SERVICE_*` variables.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::CampusConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/campus/campus.toml`
/// 3. `~/.config/campus/campus.toml`
/// 4. `./campus.toml`
/// 5. Legacy `AI_SERVICE_URL`, `AI_SERVICE_API_KEY`, `AI_CACHE_TIMEOUT_MS`
/// 6. `CAMPUS_*` environment variables
pub fn load_config() -> Result<CampusConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no files, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<CampusConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(CampusConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<CampusConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(CampusConfig::default()))
        .merge(Toml::file(path))
        .merge(legacy_env_provider())
        .merge(env_provider())
        .extract()
}

/// Build the Figment used for config loading, before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(CampusConfig::default()))
        .merge(Toml::file("/etc/campus/campus.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("campus/campus.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("campus.toml"))
        .merge(legacy_env_provider())
        .merge(env_provider())
}

const SECTIONS: [&str; 4] = ["agent", "ai", "cache", "routing"];

/// `CAMPUS_*` variables, mapped section-by-section with `Env::map()`.
///
/// `Env::split("_")` would turn `CAMPUS_AI_API_KEY` into `ai.api.key`; only the
/// first underscore after the section name is a separator. Keys arrive with
/// their original (usually uppercase) spelling.
fn env_provider() -> Env {
    Env::prefixed("CAMPUS_").map(|key| {
        let lower = key.as_str().to_ascii_lowercase();
        let mapped = SECTIONS
            .iter()
            .find_map(|section| {
                lower
                    .strip_prefix(section)
                    .and_then(|rest| rest.strip_prefix('_'))
                    .map(|field| format!("{section}.{field}"))
            })
            .unwrap_or(lower);
        mapped.into()
    })
}

/// Variable names the service used before the `CAMPUS_` prefix existed.
fn legacy_env_provider() -> Env {
    Env::raw()
        .only(&["AI_SERVICE_URL", "AI_SERVICE_API_KEY", "AI_CACHE_TIMEOUT_MS"])
        .map(|key| {
            let key = key.as_str();
            let mapped = if key.eq_ignore_ascii_case("ai_service_url") {
                "ai.base_url"
            } else if key.eq_ignore_ascii_case("ai_service_api_key") {
                "ai.api_key"
            } else if key.eq_ignore_ascii_case("ai_cache_timeout_ms") {
                "cache.ttl_ms"
            } else {
                key
            };
            mapped.to_string().into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::UserMode;
    use figment::Jail;

    #[test]
    fn defaults_match_documented_values() {
        let config = load_config_from_str("").unwrap();
        assert_eq!(config.cache.ttl_ms, 1_800_000);
        assert_eq!(config.cache.max_entries, 1000);
        assert_eq!(config.routing.default_user_mode, UserMode::Balanced);
        assert_eq!(config.routing.academic_user_mode, UserMode::Smart);
        assert_eq!(config.ai.timeout_secs, 30);
        assert_eq!(config.ai.max_retries, 1);
        assert!(config.ai.api_key.is_none());
    }

    #[test]
    fn campus_env_vars_override_file_values() {
        Jail::expect_with(|jail| {
            jail.create_file("campus.toml", "[cache]\nttl_ms = 5000\n")?;
            jail.set_env("CAMPUS_AI_API_KEY", "sk-from-env");
            jail.set_env("CAMPUS_CACHE_MAX_ENTRIES", "42");
            jail.set_env("CAMPUS_ROUTING_DEFAULT_USER_MODE", "fast");

            let config = load_config()?;
            assert_eq!(config.ai.api_key.as_deref(), Some("sk-from-env"));
            assert_eq!(config.cache.ttl_ms, 5000);
            assert_eq!(config.cache.max_entries, 42);
            assert_eq!(config.routing.default_user_mode, UserMode::Fast);
            Ok(())
        });
    }

    #[test]
    fn uppercase_env_keys_map_to_sections() {
        Jail::expect_with(|jail| {
            jail.set_env("CAMPUS_AGENT_LOG_LEVEL", "debug");
            jail.set_env("CAMPUS_AI_BASE_URL", "http://localhost:8080/v1");
            jail.set_env("CAMPUS_AI_TIMEOUT_SECS", "5");
            jail.set_env("CAMPUS_CACHE_TTL_MS", "1234");
            jail.set_env("CAMPUS_ROUTING_ACADEMIC_USER_MODE", "balanced");

            let config = load_config()?;
            assert_eq!(config.agent.log_level, "debug");
            assert_eq!(config.ai.base_url, "http://localhost:8080/v1");
            assert_eq!(config.ai.timeout_secs, 5);
            assert_eq!(config.cache.ttl_ms, 1234);
            assert_eq!(config.routing.academic_user_mode, UserMode::Balanced);
            Ok(())
        });
    }

    #[test]
    fn legacy_env_vars_are_honoured() {
        Jail::expect_with(|jail| {
            jail.set_env("AI_SERVICE_URL", "http://localhost:9999/v1");
            jail.set_env("AI_SERVICE_API_KEY", "legacy-key");
            jail.set_env("AI_CACHE_TIMEOUT_MS", "60000");

            let config = load_config()?;
            assert_eq!(config.ai.base_url, "http://localhost:9999/v1");
            assert_eq!(config.ai.api_key.as_deref(), Some("legacy-key"));
            assert_eq!(config.cache.ttl_ms, 60_000);
            Ok(())
        });
    }

    #[test]
    fn prefixed_env_wins_over_legacy() {
        Jail::expect_with(|jail| {
            jail.set_env("AI_SERVICE_API_KEY", "legacy-key");
            jail.set_env("CAMPUS_AI_API_KEY", "new-key");

            let config = load_config()?;
            assert_eq!(config.ai.api_key.as_deref(), Some("new-key"));
            Ok(())
        });
    }
}
