//! LlmClient trait definition

use async_trait::async_trait;

use super::{CompletionRequest, CompletionResponse, LlmError};

/// Stateless LLM client - each call is independent
///
/// This is the core abstraction both players talk through. Every game
/// decision (secret choice, guess, hint, analysis) is a single completion
/// request carrying whatever history it needs in the prompt; no
/// conversation state lives in the client.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send a single completion request (blocking until complete)
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError>;
}
