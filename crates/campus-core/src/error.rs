// SPDX-FileCopyrightText: 2026 Campus Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Campus AI assistant.

use thiserror::Error;

/// The primary error type used across collaborator traits and core operations.
///
/// Provider and catalog errors are operational: the assistant layer absorbs
/// them and never surfaces them to its own callers.
#[derive(Debug, Error)]
pub enum CampusError {
    /// Configuration errors (invalid values, unusable header values).
    #[error("configuration error: {0}")]
    Config(String),

    /// AI provider errors (transport failure, non-success status, malformed body).
    #[error("provider error: {message}")]
    Provider {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Course catalog lookup errors.
    #[error("catalog error: {message}")]
    Catalog {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Operation timed out.
    #[error("operation timed out after {duration:?}")]
    Timeout { duration: std::time::Duration },
}

impl CampusError {
    /// Shorthand for a provider error without an underlying source.
    pub fn provider(message: impl Into<String>) -> Self {
        CampusError::Provider {
            message: message.into(),
            source: None,
        }
    }
}
