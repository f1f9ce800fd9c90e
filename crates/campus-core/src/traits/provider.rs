// SPDX-FileCopyrightText: 2026 Campus Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provider trait for chat-completion backends (OpenAI-compatible APIs, mocks).

use async_trait::async_trait;

use crate::error::CampusError;
use crate::types::{CompletionRequest, CompletionResponse};

/// A single-shot chat-completion backend.
///
/// Implementations make exactly one logical call per `complete`. Any error
/// returned here is absorbed by the assistant into a canned fallback reply.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    /// Sends the assembled prompt and returns the first choice's content.
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, CampusError>;
}
