//! Candidate range tracking
//!
//! The guesser's view of where the secret can still be, derived from the
//! feedback it has received. Also the home of the deterministic fallback
//! strategy: when the model gives nothing usable, guess the midpoint.

use tracing::debug;

use crate::game::engine::RoundRecord;
use crate::game::outcome::Outcome;

/// Inclusive range of numbers still consistent with all feedback so far
///
/// Contradictory feedback can empty the range (`low > high`). The interval
/// stays representable in that state so callers can detect it rather than
/// panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchInterval {
    pub low: i64,
    pub high: i64,
}

impl SearchInterval {
    pub fn new(low: i64, high: i64) -> Self {
        Self { low, high }
    }

    /// Rebuild the interval for a game's full history
    ///
    /// Replays every recorded round against the starting range. Deriving
    /// from history keeps the interval correct even when rounds were
    /// recorded by someone else.
    pub fn from_rounds(low: i64, high: i64, rounds: &[RoundRecord]) -> Self {
        let mut interval = Self::new(low, high);
        for round in rounds {
            interval.narrow(round.guess, round.outcome);
        }
        interval
    }

    /// Shrink the interval according to one piece of feedback
    pub fn narrow(&mut self, guess: i64, outcome: Outcome) {
        match outcome {
            Outcome::TooLow => self.low = self.low.max(guess + 1),
            Outcome::TooHigh => self.high = self.high.min(guess - 1),
            Outcome::Correct => {
                self.low = guess;
                self.high = guess;
            }
        }
        debug!(guess, low = self.low, high = self.high, "narrow: interval updated");
    }

    /// Midpoint of the interval, rounding down
    ///
    /// This is the fallback guess. Bisecting from here finds any secret in
    /// a 100-wide range within seven guesses.
    pub fn midpoint(&self) -> i64 {
        (self.low + self.high).div_euclid(2)
    }

    pub fn contains(&self, value: i64) -> bool {
        self.low <= value && value <= self.high
    }

    pub fn is_empty(&self) -> bool {
        self.low > self.high
    }
}
