// SPDX-FileCopyrightText: 2026 Campus Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock completion provider for deterministic testing.
//!
//! `MockProvider` implements `CompletionProvider` with pre-configured
//! outcomes and records every request it receives, so tests can assert on
//! the assembled prompt and on how many calls were made.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use campus_core::{
    CampusError, CompletionProvider, CompletionRequest, CompletionResponse, TokenUsage,
};

/// Tokens reported for every successful mock reply.
pub const MOCK_TOKENS: u64 = 30;

enum Outcome {
    Reply(String),
    Fail(String),
}

/// A mock provider that returns pre-configured outcomes.
///
/// Outcomes are popped from a FIFO queue. When the queue is empty, a default
/// "mock response" reply is returned, or an error in failing mode.
#[derive(Clone)]
pub struct MockProvider {
    outcomes: Arc<Mutex<VecDeque<Outcome>>>,
    requests: Arc<Mutex<Vec<CompletionRequest>>>,
    always_fail: bool,
}

impl MockProvider {
    /// Create a new mock provider with an empty queue.
    pub fn new() -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            always_fail: false,
        }
    }

    /// Create a mock provider pre-loaded with the given replies.
    pub fn with_responses(responses: Vec<String>) -> Self {
        let provider = Self::new();
        let queue = responses.into_iter().map(Outcome::Reply).collect();
        Self {
            outcomes: Arc::new(Mutex::new(queue)),
            ..provider
        }
    }

    /// A provider whose every call fails, as an unreachable API would.
    pub fn failing() -> Self {
        Self {
            always_fail: true,
            ..Self::new()
        }
    }

    /// Queue a successful reply.
    pub async fn push_response(&self, text: impl Into<String>) {
        self.outcomes
            .lock()
            .await
            .push_back(Outcome::Reply(text.into()));
    }

    /// Queue a failure.
    pub async fn push_error(&self, message: impl Into<String>) {
        self.outcomes
            .lock()
            .await
            .push_back(Outcome::Fail(message.into()));
    }

    /// Number of `complete` calls made so far.
    pub async fn call_count(&self) -> usize {
        self.requests.lock().await.len()
    }

    /// Every request received, oldest first.
    pub async fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().await.clone()
    }

    /// The most recent request, if any.
    pub async fn last_request(&self) -> Option<CompletionRequest> {
        self.requests.lock().await.last().cloned()
    }

    async fn next_outcome(&self) -> Outcome {
        let queued = self.outcomes.lock().await.pop_front();
        match queued {
            Some(outcome) => outcome,
            None if self.always_fail => Outcome::Fail("mock provider unavailable".into()),
            None => Outcome::Reply("mock response".into()),
        }
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionProvider for MockProvider {
    fn name(&self) -> &str {
        "mock-provider"
    }

    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, CampusError> {
        self.requests.lock().await.push(request);
        match self.next_outcome().await {
            Outcome::Reply(content) => Ok(CompletionResponse {
                content,
                usage: TokenUsage {
                    total_tokens: MOCK_TOKENS,
                },
            }),
            Outcome::Fail(message) => Err(CampusError::provider(message)),
        }
    }
}
