//! Round orchestration
//!
//! `GameEngine` drives one full game: the setter chooses a secret, then
//! guess/feedback rounds run until the guesser finds it or the guess
//! budget runs out. Dialogue (hints, analysis) rides on configurable
//! cadences and is never allowed to end a game early.

use std::time::{Duration, Instant};

use colored::*;
use gamestore::{GameRecord, Winner};
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::config::{DialogueConfig, GameConfig};
use crate::console;
use crate::game::outcome::Outcome;
use crate::players::{Guesser, Setter};

/// One completed round of the duel
#[derive(Debug, Clone)]
pub struct RoundRecord {
    /// Round number, starting at 1
    pub round: u32,
    /// The guess made this round
    pub guess: i64,
    /// How the guess compared to the secret
    pub outcome: Outcome,
    /// Feedback line announced to the guesser
    pub feedback: String,
}

/// Lifecycle phase of a game
///
/// Terminal phases (`Won`, `Exhausted`) are never left again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// No secret chosen yet
    NotStarted,
    /// Round `round` is being played
    InProgress { round: u32 },
    /// The guesser found the secret
    Won,
    /// Every guess was used without finding the secret
    Exhausted,
}

/// Orchestrates a single game between the setter and the guesser
pub struct GameEngine {
    game: GameConfig,
    dialogue: DialogueConfig,
    setter: Setter,
    guesser: Guesser,
    rounds: Vec<RoundRecord>,
    hints: Vec<String>,
    phase: GamePhase,
}

impl GameEngine {
    pub fn new(game: GameConfig, dialogue: DialogueConfig, setter: Setter, guesser: Guesser) -> Self {
        debug!(
            max_guesses = game.max_guesses,
            min = game.min_number,
            max = game.max_number,
            "GameEngine::new: called"
        );
        Self {
            game,
            dialogue,
            setter,
            guesser,
            rounds: Vec::new(),
            hints: Vec::new(),
            phase: GamePhase::NotStarted,
        }
    }

    /// Play the game to completion and return its record
    ///
    /// Consumes the engine: one engine, one game. Player failures inside
    /// the loop degrade (fallback guess, skipped hint) rather than
    /// terminate, so a started game always reaches a terminal phase.
    pub async fn run(mut self) -> GameRecord {
        let started = Instant::now();

        console::section("GAME START");
        let secret = self.setter.choose_secret().await;
        info!(secret, "Secret number chosen");
        println!("{}", "🤫 The setter has chosen a secret number...".dimmed());
        sleep(Duration::from_millis(self.game.start_delay_ms)).await;

        self.phase = GamePhase::InProgress { round: 1 };
        while let GamePhase::InProgress { round } = self.phase {
            info!(round, max = self.game.max_guesses, "Round starting");
            console::section(&format!("ROUND {}/{}", round, self.game.max_guesses));

            let guess = self.guesser.next_guess(&self.rounds).await;
            println!("{} {}", "🎲 Guesser guesses:".bold(), guess.to_string().cyan().bold());

            let outcome = Outcome::evaluate(secret, guess);
            let feedback = outcome.feedback_message(guess, secret);
            println!("   {}", feedback.yellow());

            self.rounds.push(RoundRecord { round, guess, outcome, feedback });

            if outcome.is_correct() {
                debug!(round, "run: correct guess, game won");
                self.phase = GamePhase::Won;
                continue;
            }

            self.exchange_dialogue(round).await;

            if round >= self.game.max_guesses {
                debug!(round, "run: guess budget exhausted");
                self.phase = GamePhase::Exhausted;
            } else {
                self.phase = GamePhase::InProgress { round: round + 1 };
                sleep(Duration::from_millis(self.game.round_delay_ms)).await;
            }
        }

        let record = self.build_record(secret, started.elapsed().as_secs());
        self.announce_result(&record);
        record
    }

    /// Run the hint and analysis exchanges due this round
    ///
    /// Each exchange fires on its own cadence. A failed exchange is
    /// logged and skipped; it never affects the round loop.
    async fn exchange_dialogue(&mut self, round: u32) {
        if self.dialogue.enable_hints && round % self.dialogue.hint_every == 0 {
            match self.setter.give_hint(&self.rounds).await {
                Ok(hint) => {
                    println!("{} {}", "💬 Setter:".magenta().bold(), hint);
                    self.hints.push(hint);
                }
                Err(e) => match e.retry_after() {
                    Some(wait) => {
                        warn!(wait_secs = wait.as_secs(), "Hint skipped, provider rate limited")
                    }
                    None => warn!(error = %e, "Hint failed, skipping"),
                },
            }
        }

        if self.dialogue.enable_analysis
            && round % self.dialogue.analysis_every == 0
            && !self.hints.is_empty()
        {
            match self.guesser.analyze_strategy(&self.hints).await {
                Ok(analysis) => println!("{} {}", "🧠 Guesser:".blue().bold(), analysis),
                Err(e) => warn!(error = %e, "Analysis failed, skipping"),
            }
        }
    }

    fn build_record(&self, secret: i64, duration_seconds: u64) -> GameRecord {
        let winner = match self.phase {
            GamePhase::Won => Winner::Guesser,
            _ => Winner::Setter,
        };
        GameRecord::new(winner, secret)
            .with_total_rounds(self.rounds.len() as u32)
            .with_guesses(self.rounds.iter().map(|r| r.guess).collect())
            .with_feedback(self.rounds.iter().map(|r| r.feedback.clone()).collect())
            .with_hints(self.hints.clone())
            .with_duration_seconds(duration_seconds)
    }

    fn announce_result(&self, record: &GameRecord) {
        console::section("GAME OVER");
        match record.winner {
            Winner::Guesser => {
                let line = format!(
                    "🏆 The guesser wins! Found {} in {} rounds.",
                    record.secret_number, record.total_rounds
                );
                println!("{}", line.green().bold());
            }
            Winner::Setter => {
                let line = format!(
                    "🛡️  The setter wins! The secret {} survived {} rounds.",
                    record.secret_number, record.total_rounds
                );
                println!("{}", line.red().bold());
            }
        }
        if !record.guesses.is_empty() {
            println!("\n{}", "Guess history:".bold());
            for (guess, feedback) in record.guesses.iter().zip(record.feedback.iter()) {
                println!("   {} {}", guess.to_string().cyan(), feedback.dimmed());
            }
        }
        println!("{}", format!("Duration: {}s", record.duration_seconds).dimmed());
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::Config;
    use crate::llm::client::mock::MockLlmClient;
    use crate::llm::LlmClient;
    use crate::prompts::PromptLoader;

    fn quiet_config() -> Config {
        let mut config = Config::default();
        config.game.start_delay_ms = 0;
        config.game.round_delay_ms = 0;
        config.dialogue.enable_hints = false;
        config.dialogue.enable_analysis = false;
        config
    }

    fn chatty_config() -> Config {
        let mut config = quiet_config();
        config.dialogue.enable_hints = true;
        config.dialogue.enable_analysis = true;
        config
    }

    fn engine_with(scripts: &[&str], config: &Config) -> (GameEngine, Arc<MockLlmClient>) {
        let mock = Arc::new(MockLlmClient::with_texts(scripts));
        let llm: Arc<dyn LlmClient> = mock.clone();
        let prompts = Arc::new(PromptLoader::embedded_only());
        let setter = Setter::new(Arc::clone(&llm), Arc::clone(&prompts), config, None).unwrap();
        let guesser = Guesser::new(llm, prompts, config, None).unwrap();
        let engine = GameEngine::new(config.game.clone(), config.dialogue.clone(), setter, guesser);
        (engine, mock)
    }

    #[tokio::test]
    async fn test_fallback_bisection_wins_without_model() {
        // Only the secret comes from the model; every guess call fails
        // over to the midpoint strategy.
        let (engine, mock) = engine_with(&["73"], &quiet_config());
        let record = engine.run().await;

        assert_eq!(record.winner, Winner::Guesser);
        assert_eq!(record.guesses, vec![50, 75, 62, 68, 71, 73]);
        assert_eq!(record.total_rounds, 6);
        assert!(record.is_consistent());
        // One call to choose the secret, one failed call per round after
        // the opening midpoint.
        assert_eq!(mock.call_count(), 6);
    }

    #[tokio::test]
    async fn test_first_guess_is_midpoint_without_model_call() {
        let (engine, mock) = engine_with(&["42", "42"], &quiet_config());
        let record = engine.run().await;

        assert_eq!(record.guesses[0], 50);
        assert_eq!(record.winner, Winner::Guesser);
        // Secret call, then a single round-two guess call. Round one
        // consumed no script.
        assert_eq!(mock.call_count(), 2);
    }

    #[tokio::test]
    async fn test_dialogue_cadence() {
        let mut config = chatty_config();
        config.game.max_guesses = 4;
        let scripts = [
            "99",                                         // secret
            "97",                                         // round 2 guess
            "Warmer, but aim far above where you are.",   // round 2 hint
            "98",                                         // round 3 guess
            "The hints point at the very top of the range.", // round 3 analysis
            "99",                                         // round 4 guess
        ];
        let (engine, mock) = engine_with(&scripts, &config);
        let record = engine.run().await;

        assert_eq!(record.winner, Winner::Guesser);
        assert_eq!(record.total_rounds, 4);
        assert_eq!(record.guesses, vec![50, 97, 98, 99]);
        assert_eq!(record.hints.len(), 1);
        assert_eq!(mock.call_count(), 6);
    }

    #[tokio::test]
    async fn test_dialogue_failures_never_end_the_game() {
        // Hints and analysis are both due repeatedly, and every one of
        // those calls fails. The game still runs to a win.
        let (engine, _mock) = engine_with(&["5"], &chatty_config());
        let record = engine.run().await;

        assert_eq!(record.winner, Winner::Guesser);
        assert_eq!(record.guesses, vec![50, 25, 12, 6, 3, 4, 5]);
        assert!(record.hints.is_empty());
        assert!(record.is_consistent());
    }

    #[tokio::test]
    async fn test_exhausted_after_max_guesses() {
        let scripts = ["100", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
        let (engine, _mock) = engine_with(&scripts, &quiet_config());
        let record = engine.run().await;

        assert_eq!(record.winner, Winner::Setter);
        assert_eq!(record.total_rounds, 10);
        assert_eq!(record.guesses.len(), 10);
        assert_eq!(record.secret_number, 100);
        assert!(record.is_consistent());
    }

    #[tokio::test]
    async fn test_every_secret_beaten_within_seven_rounds() {
        for secret in 1..=100 {
            let script = secret.to_string();
            let (engine, _mock) = engine_with(&[script.as_str()], &quiet_config());
            let record = engine.run().await;

            assert_eq!(record.winner, Winner::Guesser, "secret {}", secret);
            assert!(record.total_rounds <= 7, "secret {} took {} rounds", secret, record.total_rounds);
            assert_eq!(record.secret_number, secret);
        }
    }
}
