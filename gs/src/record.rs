//! GameRecord domain type
//!
//! Persistent record of a single completed game. Exactly one record exists
//! per game, written only after the game reaches a terminal state.

use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;
use uuid::Uuid;

/// Which player won the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    /// The guesser found the secret within the guess limit
    Guesser,
    /// The guesser exhausted every guess
    Setter,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::Guesser => write!(f, "guesser"),
            Winner::Setter => write!(f, "setter"),
        }
    }
}

/// Persistent record of a single completed game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    /// Unique game ID
    pub game_id: String,

    /// Completion timestamp, `%Y%m%d_%H%M%S` local time (also the file stem)
    pub timestamp: String,

    /// Winning player
    pub winner: Winner,

    /// The setter's secret number
    pub secret_number: i64,

    /// Number of rounds played
    pub total_rounds: u32,

    /// Every guess, in round order
    pub guesses: Vec<i64>,

    /// Feedback line for every guess, same order and length as `guesses`
    pub feedback: Vec<String>,

    /// Hints the setter gave, in the order given
    pub hints: Vec<String>,

    /// Wall-clock duration of the game
    pub duration_seconds: u64,
}

impl GameRecord {
    /// Create a new GameRecord stamped with the current local time
    pub fn new(winner: Winner, secret_number: i64) -> Self {
        debug!(%winner, secret_number, "GameRecord::new: called");
        Self {
            game_id: Uuid::now_v7().to_string(),
            timestamp: Local::now().format("%Y%m%d_%H%M%S").to_string(),
            winner,
            secret_number,
            total_rounds: 0,
            guesses: Vec::new(),
            feedback: Vec::new(),
            hints: Vec::new(),
            duration_seconds: 0,
        }
    }

    /// Builder: set rounds played
    pub fn with_total_rounds(mut self, total_rounds: u32) -> Self {
        self.total_rounds = total_rounds;
        debug!(%self.game_id, total_rounds, "GameRecord::with_total_rounds");
        self
    }

    /// Builder: set the guess sequence
    pub fn with_guesses(mut self, guesses: Vec<i64>) -> Self {
        debug!(%self.game_id, num_guesses = guesses.len(), "GameRecord::with_guesses");
        self.guesses = guesses;
        self
    }

    /// Builder: set the feedback lines
    pub fn with_feedback(mut self, feedback: Vec<String>) -> Self {
        debug!(%self.game_id, num_feedback = feedback.len(), "GameRecord::with_feedback");
        self.feedback = feedback;
        self
    }

    /// Builder: set the hints given
    pub fn with_hints(mut self, hints: Vec<String>) -> Self {
        debug!(%self.game_id, num_hints = hints.len(), "GameRecord::with_hints");
        self.hints = hints;
        self
    }

    /// Builder: set wall-clock duration
    pub fn with_duration_seconds(mut self, duration_seconds: u64) -> Self {
        self.duration_seconds = duration_seconds;
        debug!(%self.game_id, duration_seconds, "GameRecord::with_duration_seconds");
        self
    }

    /// Storage file name for this record
    pub fn file_name(&self) -> String {
        format!("game_{}.json", self.timestamp)
    }

    /// Check that the guess and feedback sequences line up with the round count
    pub fn is_consistent(&self) -> bool {
        self.guesses.len() == self.total_rounds as usize && self.feedback.len() == self.guesses.len()
    }
}
