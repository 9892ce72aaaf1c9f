//! NumDuel - Adversarial Number Guessing Between Two LLM Players
//!
//! Two model-backed players face off over a secret number. The setter
//! chooses it and drops hints of questionable honesty; the guesser hunts
//! it down under a fixed guess budget while a referee announces honest
//! too-low/too-high feedback after every guess.
//!
//! # Core Concepts
//!
//! - **Honest referee, unreliable players**: Feedback is computed locally
//!   and never lies. Everything the models say is just dialogue.
//! - **Deterministic floor**: Every model interaction has a local
//!   fallback (midpoint bisection, random secret), so a game always
//!   finishes even with the provider down.
//! - **Memory across games**: Each role keeps a short journal of past
//!   games that feeds the next game's system prompt.
//!
//! # Modules
//!
//! - [`llm`] - LLM client trait and OpenAI-compatible implementation
//! - [`players`] - The setter and guesser roles
//! - [`game`] - Feedback evaluation, range tracking, round orchestration
//! - [`prompts`] - Prompt template loading and rendering
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface

pub mod cli;
pub mod config;
pub mod console;
pub mod game;
pub mod llm;
pub mod players;
pub mod prompts;

// Re-export commonly used types
pub use config::{Config, DialogueConfig, GameConfig, LlmConfig, MemoryConfig, StorageConfig};
pub use game::{GameEngine, GamePhase, Outcome, RoundRecord, SearchInterval};
pub use llm::{
    CompletionRequest, CompletionResponse, LlmClient, LlmError, Message, OpenAIClient, Role,
    create_client,
};
pub use players::{Guesser, Setter, parse_integer};
pub use prompts::PromptLoader;
