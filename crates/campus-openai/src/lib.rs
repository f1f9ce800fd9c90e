// SPDX-FileCopyrightText: 2026 Campus Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! OpenAI-compatible completion provider for the Campus assistant.
//!
//! This crate implements [`CompletionProvider`] for the chat-completions API,
//! sending one single-shot request per call.

pub mod client;
pub mod types;

use async_trait::async_trait;
use campus_config::model::AiConfig;
use campus_core::{
    CampusError, CompletionProvider, CompletionRequest, CompletionResponse, TokenUsage,
};
use tracing::{debug, info};

use crate::client::OpenAiClient;
use crate::types::ChatCompletionRequest;

/// Content used when the API answers without any text.
pub const EMPTY_COMPLETION_TEXT: &str = "No response generated";

/// Chat-completions provider implementing [`CompletionProvider`].
pub struct OpenAiProvider {
    client: OpenAiClient,
}

impl OpenAiProvider {
    /// Creates a provider from the `[ai]` settings.
    ///
    /// Returns [`CampusError::Config`] when no credential is configured;
    /// callers treat that as "run without a provider".
    pub fn new(config: &AiConfig) -> Result<Self, CampusError> {
        let client = OpenAiClient::new(config)?;
        info!(endpoint = client.endpoint(), "OpenAI provider initialized");
        Ok(Self { client })
    }

    pub fn with_client(client: OpenAiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, CampusError> {
        let wire = ChatCompletionRequest::from(request);
        let response = self.client.chat_completion(&wire).await?;

        let usage = TokenUsage {
            total_tokens: response.total_tokens(),
        };
        debug!(
            id = response.id.as_deref().unwrap_or("-"),
            model = %wire.model,
            total_tokens = usage.total_tokens,
            "completion received"
        );

        Ok(CompletionResponse {
            content: response
                .first_content()
                .unwrap_or(EMPTY_COMPLETION_TEXT)
                .to_string(),
            usage,
        })
    }
}
