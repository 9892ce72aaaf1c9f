//! The Guesser player
//!
//! Asks the model for each guess after the opening move, with the
//! midpoint of the still-possible range as the fallback whenever the
//! model fails or answers with nothing usable.

use std::sync::Arc;

use eyre::Result;
use tracing::{debug, warn};

use crate::config::Config;
use crate::game::engine::RoundRecord;
use crate::game::interval::SearchInterval;
use crate::llm::{CompletionRequest, LlmClient, LlmError, Message};
use crate::players::parse::parse_integer;
use crate::prompts::{AnalyzeContext, GuessContext, PromptLoader, SystemContext};

pub struct Guesser {
    llm: Arc<dyn LlmClient>,
    prompts: Arc<PromptLoader>,
    system_prompt: String,
    min: i64,
    max: i64,
    max_guesses: u32,
    max_words: u32,
    max_tokens: u32,
    temperature: f32,
}

impl Guesser {
    pub fn new(
        llm: Arc<dyn LlmClient>,
        prompts: Arc<PromptLoader>,
        config: &Config,
        experience: Option<String>,
    ) -> Result<Self> {
        debug!(has_experience = experience.is_some(), "Guesser::new: called");
        let system_prompt = prompts.render(
            "guesser-system",
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
            max_guesses: config.game.max_guesses,
            max_words: config.dialogue.max_words,
            max_tokens: config.llm.max_tokens,
            temperature: config.llm.temperature,
        })
    }

    /// Produce the next guess given the rounds played so far
    ///
    /// The opening move is always the full-range midpoint, with no model
    /// round trip. Later guesses come from the model, clamped into range,
    /// and fall back to the midpoint of the interval still consistent
    /// with feedback.
    pub async fn next_guess(&self, rounds: &[RoundRecord]) -> i64 {
        debug!(round_count = rounds.len(), "Guesser::next_guess: called");
        if rounds.is_empty() {
            return SearchInterval::new(self.min, self.max).midpoint();
        }

        match self.ask_for_guess(rounds).await {
            Ok(Some(guess)) => guess.clamp(self.min, self.max),
            Ok(None) => {
                warn!("Guess response had no usable number, using fallback");
                self.fallback_guess(rounds)
            }
            Err(e) => {
                warn!(error = %e, "Guess request failed, using fallback");
                self.fallback_guess(rounds)
            }
        }
    }

    /// Ask the model to think aloud about the setter's hints
    pub async fn analyze_strategy(&self, hints: &[String]) -> Result<String, LlmError> {
        debug!(hint_count = hints.len(), "Guesser::analyze_strategy: called");
        let hints_text = hints
            .iter()
            .enumerate()
            .map(|(i, hint)| format!("Hint {}: {}", i + 1, hint))
            .collect::<Vec<_>>()
            .join("\n");

        let prompt = self
            .prompts
            .render("analyze", &AnalyzeContext { hints: hints_text, max_words: self.max_words })
            .map_err(|e| LlmError::InvalidResponse(format!("Prompt render failed: {}", e)))?;
        let response = self.llm.complete(self.request(prompt)).await?;
        response
            .content
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or_else(|| LlmError::InvalidResponse("Empty analysis response".to_string()))
    }

    /// Midpoint of the range still consistent with the feedback so far
    fn fallback_guess(&self, rounds: &[RoundRecord]) -> i64 {
        let interval = SearchInterval::from_rounds(self.min, self.max, rounds);
        if interval.is_empty() {
            // Feedback contradicted itself; restart from the full range
            warn!("Candidate interval is empty, guessing the full-range midpoint");
            return SearchInterval::new(self.min, self.max).midpoint();
        }
        interval.midpoint()
    }

    fn request(&self, prompt: String) -> CompletionRequest {
        CompletionRequest {
            system_prompt: self.system_prompt.clone(),
            messages: vec![Message::user(prompt)],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }

    async fn ask_for_guess(&self, rounds: &[RoundRecord]) -> Result<Option<i64>> {
        let history = rounds
            .iter()
            .map(|r| format!("Guess {}: {} → {}", r.round, r.guess, r.feedback))
            .collect::<Vec<_>>()
            .join("\n");
        let remaining = self.max_guesses.saturating_sub(rounds.len() as u32);

        let prompt = self.prompts.render(
            "next-guess",
            &GuessContext { min: self.min, max: self.max, history, remaining },
        )?;
        let response = self.llm.complete(self.request(prompt)).await?;
        Ok(response.content.as_deref().and_then(parse_integer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::outcome::Outcome;
    use crate::llm::client::mock::MockLlmClient;

    fn guesser_with(scripts: &[&str]) -> (Guesser, Arc<MockLlmClient>) {
        let mock = Arc::new(MockLlmClient::with_texts(scripts));
        let llm: Arc<dyn LlmClient> = mock.clone();
        let prompts = Arc::new(PromptLoader::embedded_only());
        let guesser = Guesser::new(llm, prompts, &Config::default(), None).unwrap();
        (guesser, mock)
    }

    fn round(n: u32, guess: i64, secret: i64) -> RoundRecord {
        let outcome = Outcome::evaluate(secret, guess);
        RoundRecord {
            round: n,
            guess,
            outcome,
            feedback: outcome.feedback_message(guess, secret),
        }
    }

    #[tokio::test]
    async fn test_opening_guess_is_midpoint_without_model_call() {
        let (guesser, mock) = guesser_with(&["should never be consumed"]);
        assert_eq!(guesser.next_guess(&[]).await, 50);
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_model_guess_is_parsed_and_clamped() {
        let (guesser, _mock) = guesser_with(&["I'll go with 500 this time"]);
        let guess = guesser.next_guess(&[round(1, 50, 73)]).await;
        assert_eq!(guess, 100);
    }

    #[tokio::test]
    async fn test_unparseable_answer_falls_back_to_interval_midpoint() {
        let (guesser, _mock) = guesser_with(&["1000"]);
        let guess = guesser.next_guess(&[round(1, 50, 73)]).await;
        assert_eq!(guess, 75);
    }

    #[tokio::test]
    async fn test_model_failure_falls_back_to_interval_midpoint() {
        let (guesser, mock) = guesser_with(&[]);
        let rounds = [round(1, 50, 73), round(2, 75, 73)];
        assert_eq!(guesser.next_guess(&rounds).await, 62);
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_contradictory_feedback_restarts_from_full_range() {
        let (guesser, _mock) = guesser_with(&[]);
        // TooLow at 50 then TooHigh at 40 leaves nothing possible
        let rounds = [
            round(1, 50, 60),
            RoundRecord {
                round: 2,
                guess: 40,
                outcome: Outcome::TooHigh,
                feedback: Outcome::TooHigh.feedback_message(40, 60),
            },
        ];
        assert_eq!(guesser.next_guess(&rounds).await, 50);
    }

    #[tokio::test]
    async fn test_analyze_strategy_trims_response() {
        let (guesser, _mock) = guesser_with(&["  They are bluffing.  "]);
        let analysis = guesser.analyze_strategy(&["It is quite large".to_string()]).await.unwrap();
        assert_eq!(analysis, "They are bluffing.");
    }

    #[tokio::test]
    async fn test_analyze_strategy_rejects_empty_response() {
        let (guesser, _mock) = guesser_with(&[""]);
        assert!(guesser.analyze_strategy(&["hint".to_string()]).await.is_err());
    }
}
