// SPDX-FileCopyrightText: 2026 Campus Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Campus AI assistant.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so a misspelled key fails
//! startup with a suggestion instead of silently falling back to a default.

use campus_core::UserMode;
use serde::{Deserialize, Serialize};

/// Top-level configuration, read once at startup.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CampusConfig {
    /// Process identity and logging.
    #[serde(default)]
    pub agent: AgentConfig,

    /// AI provider endpoint, credential, and call policy.
    #[serde(default)]
    pub ai: AiConfig,

    /// In-memory response cache.
    #[serde(default)]
    pub cache: CacheConfig,

    /// Default user modes per chat domain.
    #[serde(default)]
    pub routing: RoutingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_agent_name() -> String {
    "campus".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// OpenAI-compatible provider settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AiConfig {
    /// Base URL; `/chat/completions` is appended.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bearer credential. `None` puts the assistant in canned-fallback mode.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Per-attempt request timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Retries after a transient failure (429/5xx/timeout).
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Delay before each retry.
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

impl AiConfig {
    /// The credential, if one is configured and non-blank.
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    1
}

fn default_retry_delay_ms() -> u64 {
    1000
}

/// Response cache settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CacheConfig {
    /// Entry lifetime in milliseconds.
    #[serde(default = "default_ttl_ms")]
    pub ttl_ms: u64,

    /// Maximum number of cached answers.
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_ms: default_ttl_ms(),
            max_entries: default_max_entries(),
        }
    }
}

fn default_ttl_ms() -> u64 {
    1_800_000
}

fn default_max_entries() -> usize {
    1000
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RoutingConfig {
    /// Mode used for course and general questions when the caller gives none.
    #[serde(default)]
    pub default_user_mode: UserMode,

    /// Mode used for academic-performance questions when the caller gives none.
    #[serde(default = "default_academic_user_mode")]
    pub academic_user_mode: UserMode,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            default_user_mode: UserMode::default(),
            academic_user_mode: default_academic_user_mode(),
        }
    }
}

fn default_academic_user_mode() -> UserMode {
    UserMode::Smart
}
