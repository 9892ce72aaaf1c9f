//! The Setter player
//!
//! Owns the secret number for one game. Selection is delegated to the
//! model with a uniform random fallback; hints are model-only and allowed
//! to fail.

use std::sync::Arc;

use eyre::Result;
use rand::Rng;
use tracing::{debug, warn};

use crate::config::Config;
use crate::game::engine::RoundRecord;
use crate::game::interval::SearchInterval;
use crate::llm::{CompletionRequest, LlmClient, LlmError, Message};
use crate::players::parse::parse_integer;
use crate::prompts::{HintContext, PromptLoader, SecretContext, SystemContext};

pub struct Setter {
    llm: Arc<dyn LlmClient>,
    prompts: Arc<PromptLoader>,
    system_prompt: String,
    min: i64,
    max: i64,
    max_words: u32,
    max_tokens: u32,
    temperature: f32,
    secret: Option<i64>,
}

impl Setter {
    pub fn new(
        llm: Arc<dyn LlmClient>,
        prompts: Arc<PromptLoader>,
        config: &Config,
        experience: Option<String>,
    ) -> Result<Self> {
        debug!(has_experience = experience.is_some(), "Setter::new: called");
        let system_prompt = prompts.render(
            "setter-system",
            &SystemContext {
                min: config.game.min_number,
                max: config.game.max_number,
                max_guesses: config.game.max_guesses,
                experience,
            },
        )?;
        Ok(Self {
            llm,
            prompts,
            system_prompt,
            min: config.game.min_number,
            max: config.game.max_number,
            max_words: config.dialogue.max_words,
            max_tokens: config.llm.max_tokens,
            temperature: config.llm.temperature,
            secret: None,
        })
    }

    /// Choose and remember the secret for this game
    ///
    /// Delegates to the model, clamping its answer into range. When the
    /// model fails or answers with nothing usable, falls back to a
    /// uniform random pick so a game can always start.
    pub async fn choose_secret(&mut self) -> i64 {
        debug!("Setter::choose_secret: called");
        let secret = match self.ask_for_secret().await {
            Ok(Some(number)) => number.clamp(self.min, self.max),
            Ok(None) => {
                warn!("Secret response had no usable number, choosing randomly");
                rand::rng().random_range(self.min..=self.max)
            }
            Err(e) => {
                warn!(error = %e, "Secret request failed, choosing randomly");
                rand::rng().random_range(self.min..=self.max)
            }
        };
        debug!(secret, "Setter::choose_secret: chosen");
        self.secret = Some(secret);
        secret
    }

    pub fn secret(&self) -> Option<i64> {
        self.secret
    }

    /// Ask the model for a hint about the secret
    ///
    /// Fallible by design. The caller decides whether a missing hint
    /// matters; in a game it never does.
    pub async fn give_hint(&self, rounds: &[RoundRecord]) -> Result<String, LlmError> {
        debug!(round_count = rounds.len(), "Setter::give_hint: called");
        let secret = self
            .secret
            .ok_or_else(|| LlmError::InvalidResponse("No secret chosen yet".to_string()))?;
        let last_guess = rounds
            .last()
            .map(|r| r.guess)
            .unwrap_or_else(|| SearchInterval::new(self.min, self.max).midpoint());

        let prompt = self
            .prompts
            .render("hint", &HintContext { secret, last_guess, max_words: self.max_words })
            .map_err(|e| LlmError::InvalidResponse(format!("Prompt render failed: {}", e)))?;
        let response = self.llm.complete(self.request(prompt)).await?;
        response
            .content
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or_else(|| LlmError::InvalidResponse("Empty hint response".to_string()))
    }

    fn request(&self, prompt: String) -> CompletionRequest {
        CompletionRequest {
            system_prompt: self.system_prompt.clone(),
            messages: vec![Message::user(prompt)],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }

    async fn ask_for_secret(&self) -> Result<Option<i64>> {
        let prompt = self
            .prompts
            .render("choose-secret", &SecretContext { min: self.min, max: self.max })?;
        let response = self.llm.complete(self.request(prompt)).await?;
        Ok(response.content.as_deref().and_then(parse_integer))
    }
}
