// SPDX-FileCopyrightText: 2026 Campus Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for OpenAI-compatible chat-completions APIs.
//!
//! Provides [`OpenAiClient`] which handles request construction, bearer
//! authentication, the per-attempt timeout, and transient error retry.

use std::time::Duration;

use campus_config::model::AiConfig;
use campus_core::CampusError;
use campus_core::redact::redact;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use tracing::{debug, warn};

use crate::types::{ApiErrorResponse, ChatCompletionRequest, ChatCompletionResponse};

/// HTTP client for chat-completions communication.
///
/// Retries transient failures (429, 500, 503, 529, timeouts) up to
/// `max_retries` times, sleeping `retry_delay` before each retry.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    timeout: Duration,
    max_retries: u32,
    retry_delay: Duration,
}

impl OpenAiClient {
    /// Creates a client from provider settings.
    ///
    /// Fails with [`CampusError::Config`] when no usable credential is set.
    pub fn new(config: &AiConfig) -> Result<Self, CampusError> {
        let api_key = config
            .credential()
            .ok_or_else(|| CampusError::Config("ai.api_key is not set".into()))?
            .to_string();

        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {api_key}"))
            .map_err(|e| CampusError::Config(format!("invalid API key header value: {e}")))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let timeout = Duration::from_secs(config.timeout_secs);
        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| CampusError::Provider {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            endpoint: format!("{}/chat/completions", config.base_url.trim_end_matches('/')),
            api_key,
            timeout,
            max_retries: config.max_retries,
            retry_delay: Duration::from_millis(config.retry_delay_ms),
        })
    }

    /// The full chat-completions URL requests are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn scrub(&self, text: &str) -> String {
        redact(text, &[self.api_key.as_str()])
    }

    /// Sends one chat-completion request and returns the parsed response.
    pub async fn chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, CampusError> {
        let mut last_error = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                warn!(attempt, "retrying completion request after transient error");
                tokio::time::sleep(self.retry_delay).await;
            }

            let response = match self.client.post(&self.endpoint).json(request).send().await {
                Ok(response) => response,
                Err(e) if e.is_timeout() => {
                    warn!(attempt, timeout = ?self.timeout, "completion request timed out");
                    last_error = Some(CampusError::Timeout {
                        duration: self.timeout,
                    });
                    continue;
                }
                Err(e) => {
                    return Err(CampusError::Provider {
                        message: self.scrub(&format!("HTTP request failed: {e}")),
                        source: Some(Box::new(e)),
                    });
                }
            };

            let status = response.status();
            debug!(status = %status, attempt, model = %request.model, "completion response received");

            if status.is_success() {
                let body = response.text().await.map_err(|e| CampusError::Provider {
                    message: format!("failed to read response body: {e}"),
                    source: Some(Box::new(e)),
                })?;
                return serde_json::from_str(&body).map_err(|e| CampusError::Provider {
                    message: format!("failed to parse API response: {e}"),
                    source: Some(Box::new(e)),
                });
            }

            let body = self.scrub(&response.text().await.unwrap_or_default());
            let message = match serde_json::from_str::<ApiErrorResponse>(&body) {
                Ok(api_err) => format!(
                    "API error {status} ({}): {}",
                    api_err.error.type_.as_deref().unwrap_or("unknown"),
                    api_err.error.message
                ),
                Err(_) => format!("API returned {status}: {body}"),
            };

            if is_transient_error(status) && attempt < self.max_retries {
                warn!(status = %status, body = %body, "transient error, will retry");
                last_error = Some(CampusError::provider(message));
                continue;
            }

            // Non-transient error or exhausted retries.
            return Err(CampusError::provider(message));
        }

        Err(last_error.unwrap_or_else(|| {
            CampusError::provider("completion request failed after retries")
        }))
    }
}

/// Returns true for HTTP status codes that indicate transient errors worth retrying.
fn is_transient_error(status: reqwest::StatusCode) -> bool {
    matches!(status.as_u16(), 429 | 500 | 503 | 529)
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::ConversationMessage;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(base_url: &str) -> AiConfig {
        AiConfig {
            base_url: base_url.to_string(),
            api_key: Some("sk-test-key-0123456789abcdefghij".into()),
            timeout_secs: 5,
            max_retries: 1,
            retry_delay_ms: 10,
        }
    }

    fn test_client(base_url: &str) -> OpenAiClient {
        OpenAiClient::new(&test_config(base_url)).unwrap()
    }

    fn test_request() -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: "gpt-4o-mini".into(),
            messages: vec![ConversationMessage::user("Hello")],
            max_tokens: 800,
            temperature: 0.7,
        }
    }

    fn success_body(text: &str, tokens: u64) -> serde_json::Value {
        serde_json::json!({
            "id": "chatcmpl-test",
            "object": "chat.completion",
            "model": "gpt-4o-mini",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": text},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 3, "completion_tokens": 4, "total_tokens": tokens}
        })
    }

    #[test]
    fn missing_credential_is_a_config_error() {
        let config = AiConfig {
            api_key: None,
            ..AiConfig::default()
        };
        let err = OpenAiClient::new(&config).unwrap_err();
        assert!(matches!(err, CampusError::Config(_)));
    }

    #[test]
    fn endpoint_joins_base_url() {
        let client = test_client("http://localhost:9999/v1/");
        assert_eq!(client.endpoint(), "http://localhost:9999/v1/chat/completions");
    }

    #[tokio::test]
    async fn chat_completion_success() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(body_partial_json(serde_json::json!({
                "model": "gpt-4o-mini",
                "max_tokens": 800
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(success_body("Hi there!", 7)))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let result = client.chat_completion(&test_request()).await.unwrap();

        assert_eq!(result.id.as_deref(), Some("chatcmpl-test"));
        assert_eq!(result.first_content(), Some("Hi there!"));
        assert_eq!(result.total_tokens(), 7);
    }

    #[tokio::test]
    async fn chat_completion_retries_on_429() {
        let server = MockServer::start().await;

        let error_body = serde_json::json!({
            "error": {"type": "rate_limit_error", "message": "Rate limited"}
        });

        // First request returns 429, second returns 200.
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(429).set_body_json(&error_body))
            .up_to_n_times(1)
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(success_body("After retry", 3)))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let result = client.chat_completion(&test_request()).await.unwrap();
        assert_eq!(result.first_content(), Some("After retry"));
    }

    #[tokio::test]
    async fn chat_completion_fails_on_400_without_retry() {
        let server = MockServer::start().await;

        let error_body = serde_json::json!({
            "error": {"type": "invalid_request_error", "message": "Bad model"}
        });

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(400).set_body_json(&error_body))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client
            .chat_completion(&test_request())
            .await
            .unwrap_err()
            .to_string();
        assert!(err.contains("invalid_request_error"), "got: {err}");
    }

    #[tokio::test]
    async fn chat_completion_exhausts_retries_on_503() {
        let server = MockServer::start().await;

        let error_body = serde_json::json!({
            "error": {"type": "server_error", "message": "Service overloaded"}
        });

        // Both attempts return 503.
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(503).set_body_json(&error_body))
            .expect(2)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client
            .chat_completion(&test_request())
            .await
            .unwrap_err()
            .to_string();
        assert!(err.contains("Service overloaded"), "got: {err}");
    }

    #[tokio::test]
    async fn timeout_is_retried_then_reported() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(success_body("late", 1))
                    .set_delay(Duration::from_secs(3)),
            )
            .expect(2)
            .mount(&server)
            .await;

        let config = AiConfig {
            timeout_secs: 1,
            ..test_config(&server.uri())
        };
        let client = OpenAiClient::new(&config).unwrap();
        let err = client.chat_completion(&test_request()).await.unwrap_err();
        assert!(matches!(err, CampusError::Timeout { .. }), "got: {err}");
    }

    #[tokio::test]
    async fn error_bodies_are_redacted() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_string("bad key sk-test-key-0123456789abcdefghij"),
            )
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client
            .chat_completion(&test_request())
            .await
            .unwrap_err()
            .to_string();
        assert!(!err.contains("0123456789abcdefghij"), "got: {err}");
        assert!(err.contains("[REDACTED]"), "got: {err}");
    }

    #[tokio::test]
    async fn client_sends_correct_headers() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header(
                "authorization",
                "Bearer sk-test-key-0123456789abcdefghij",
            ))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(success_body("ok", 1)))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let result = client.chat_completion(&test_request()).await;
        assert!(result.is_ok(), "headers should match: {result:?}");
    }
}
