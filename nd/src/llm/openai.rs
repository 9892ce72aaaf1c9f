//! OpenAI-compatible API client
//!
//! Implements the LlmClient trait against the Chat Completions protocol.
//! DeepSeek's API is OpenAI-compatible, so the default provider uses this
//! client pointed at api.deepseek.com.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use super::{CompletionRequest, CompletionResponse, LlmClient, LlmError, StopReason, TokenUsage};
use crate::config::LlmConfig;

/// Maximum number of retries for transient errors
const MAX_RETRIES: u32 = 3;

/// Initial backoff delay for retries
const INITIAL_BACKOFF_MS: u64 = 1000;

/// Check if an HTTP status code is retryable
fn is_retryable_status(status: u16) -> bool {
    matches!(status, 408 | 429 | 500 | 502 | 503 | 504)
}

/// Client for OpenAI-compatible chat completion endpoints
pub struct OpenAIClient {
    model: String,
    api_key: String,
    base_url: String,
    http: Client,
    max_tokens: u32,
}

impl OpenAIClient {
    /// Create a new client from configuration
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        debug!(model = %config.model, base_url = %config.base_url, "OpenAIClient::from_config: called");
        let api_key = config
            .api_key()
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        let timeout = Duration::from_millis(config.timeout_ms);
        let http = Client::builder().timeout(timeout).build().map_err(LlmError::Network)?;

        Ok(Self {
            model: config.model.clone(),
            api_key,
            base_url: config.base_url.clone(),
            http,
            max_tokens: config.max_tokens,
        })
    }

    /// Build the request body for the chat completions endpoint
    fn build_request_body(&self, request: &CompletionRequest) -> serde_json::Value {
        debug!(%self.model, %request.max_tokens, "build_request_body: called");

        let mut messages = vec![serde_json::json!({
            "role": "system",
            "content": request.system_prompt,
        })];
        for msg in &request.messages {
            messages.push(serde_json::json!({
                "role": msg.role,
                "content": msg.content,
            }));
        }

        let max_tokens = request.max_tokens.min(self.max_tokens);

        serde_json::json!({
            "model": self.model,
            "messages": messages,
            "max_tokens": max_tokens,
            "temperature": request.temperature,
        })
    }

    /// Parse the API response
    fn parse_response(&self, api_response: ChatResponse) -> CompletionResponse {
        debug!(choice_count = api_response.choices.len(), "parse_response: called");
        let choice = api_response.choices.into_iter().next();

        let (content, stop_reason) = match choice {
            Some(c) => {
                let stop_reason = match c.finish_reason.as_deref() {
                    Some("length") => StopReason::MaxTokens,
                    _ => StopReason::EndTurn,
                };
                (c.message.content, stop_reason)
            }
            None => (None, StopReason::EndTurn),
        };

        CompletionResponse {
            content,
            stop_reason,
            usage: TokenUsage {
                input_tokens: api_response.usage.prompt_tokens,
                output_tokens: api_response.usage.completion_tokens,
            },
        }
    }
}

#[async_trait]
impl LlmClient for OpenAIClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        debug!(%self.model, %request.max_tokens, "complete: called");
        let url = format!("{}/v1/chat/completions", self.base_url);
        let body = self.build_request_body(&request);

        let mut last_error = None;
        for attempt in 0..=MAX_RETRIES {
            if attempt > 0 {
                let backoff = INITIAL_BACKOFF_MS * 2u64.pow(attempt - 1);
                warn!(
                    attempt,
                    backoff_ms = backoff,
                    "complete: retrying after transient error"
                );
                tokio::time::sleep(Duration::from_millis(backoff)).await;
            }

            let response = match self
                .http
                .post(url.clone())
                .header("Authorization", format!("Bearer {}", self.api_key))
                .header("content-type", "application/json")
                .json(&body)
                .send()
                .await
            {
                Ok(r) => r,
                Err(e) => {
                    debug!(attempt, error = %e, "complete: network error");
                    last_error = Some(LlmError::Network(e));
                    continue;
                }
            };

            let status = response.status().as_u16();

            if status == 429 {
                debug!("complete: rate limited (429)");
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|s| s.parse::<u64>().ok())
                    .unwrap_or(60);

                return Err(LlmError::RateLimited {
                    retry_after: Duration::from_secs(retry_after),
                });
            }

            if is_retryable_status(status) && attempt < MAX_RETRIES {
                let text = response.text().await.unwrap_or_default();
                debug!(attempt, status, "complete: retryable error");
                last_error = Some(LlmError::ApiError { status, message: text });
                continue;
            }

            if !response.status().is_success() {
                debug!(%status, "complete: API error");
                let text = response.text().await.unwrap_or_default();
                return Err(LlmError::ApiError { status, message: text });
            }

            debug!("complete: success");
            let api_response: ChatResponse = response.json().await?;
            return Ok(self.parse_response(api_response));
        }

        Err(last_error.unwrap_or_else(|| LlmError::InvalidResponse("Max retries exceeded".to_string())))
    }
}

// Chat completions response types

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
    usage: ChatUsage,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatUsage {
    prompt_tokens: u64,
    completion_tokens: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::Message;

    fn test_client() -> OpenAIClient {
        OpenAIClient {
            model: "deepseek-chat".to_string(),
            api_key: "test-key".to_string(),
            base_url: "https://api.deepseek.com".to_string(),
            http: Client::new(),
            max_tokens: 1000,
        }
    }

    #[test]
    fn test_build_request_body_basic() {
        let client = test_client();

        let request = CompletionRequest {
            system_prompt: "You are the Number Setter".to_string(),
            messages: vec![Message::user("Choose a secret number")],
            max_tokens: 500,
            temperature: 0.8,
        };

        let body = client.build_request_body(&request);

        assert_eq!(body["model"], "deepseek-chat");
        assert_eq!(body["max_tokens"], 500);
        assert_eq!(body["temperature"], 0.8);
        assert!(body["messages"].is_array());
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][0]["content"], "You are the Number Setter");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "Choose a secret number");
    }

    #[test]
    fn test_max_tokens_capped() {
        let client = test_client();

        let request = CompletionRequest {
            system_prompt: "Test".to_string(),
            messages: vec![],
            max_tokens: 5000,
            temperature: 0.0,
        };

        let body = client.build_request_body(&request);
        assert_eq!(body["max_tokens"], 1000);
    }

    #[test]
    fn test_parse_response_content() {
        let client = test_client();

        let api_response = ChatResponse {
            choices: vec![ChatChoice {
                message: ChatMessage {
                    content: Some("I choose 37".to_string()),
                },
                finish_reason: Some("stop".to_string()),
            }],
            usage: ChatUsage {
                prompt_tokens: 100,
                completion_tokens: 5,
            },
        };

        let response = client.parse_response(api_response);
        assert_eq!(response.content, Some("I choose 37".to_string()));
        assert_eq!(response.stop_reason, StopReason::EndTurn);
        assert_eq!(response.usage.input_tokens, 100);
        assert_eq!(response.usage.output_tokens, 5);
    }

    #[test]
    fn test_parse_response_truncated() {
        let client = test_client();

        let api_response = ChatResponse {
            choices: vec![ChatChoice {
                message: ChatMessage { content: None },
                finish_reason: Some("length".to_string()),
            }],
            usage: ChatUsage {
                prompt_tokens: 10,
                completion_tokens: 1000,
            },
        };

        let response = client.parse_response(api_response);
        assert_eq!(response.content, None);
        assert_eq!(response.stop_reason, StopReason::MaxTokens);
    }

    #[test]
    fn test_parse_response_no_choices() {
        let client = test_client();

        let api_response = ChatResponse {
            choices: vec![],
            usage: ChatUsage {
                prompt_tokens: 0,
                completion_tokens: 0,
            },
        };

        let response = client.parse_response(api_response);
        assert_eq!(response.content, None);
        assert_eq!(response.stop_reason, StopReason::EndTurn);
    }

    #[test]
    fn test_retryable_status_codes() {
        assert!(is_retryable_status(408));
        assert!(is_retryable_status(429));
        assert!(is_retryable_status(500));
        assert!(is_retryable_status(503));
        assert!(!is_retryable_status(200));
        assert!(!is_retryable_status(400));
        assert!(!is_retryable_status(401));
    }
}
