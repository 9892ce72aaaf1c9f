//! Feedback evaluation
//!
//! Pure comparison of a guess against the secret, plus the canonical
//! feedback lines the setter announces (and the game record stores).

use serde::{Deserialize, Serialize};

/// Result of comparing a guess against the secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    TooLow,
    TooHigh,
    Correct,
}

impl Outcome {
    /// Compare a guess against the secret
    pub fn evaluate(secret: i64, guess: i64) -> Self {
        if guess < secret {
            Outcome::TooLow
        } else if guess > secret {
            Outcome::TooHigh
        } else {
            Outcome::Correct
        }
    }

    pub fn is_correct(&self) -> bool {
        matches!(self, Outcome::Correct)
    }

    /// The feedback line announced to the guesser and stored in the record
    pub fn feedback_message(&self, guess: i64, secret: i64) -> String {
        match self {
            Outcome::Correct => format!("🎯 Correct! The number was {}", secret),
            Outcome::TooLow => format!("📈 Too low! (Guess: {})", guess),
            Outcome::TooHigh => format!("📉 Too high! (Guess: {})", guess),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_equal_is_correct() {
        for secret in [1, 42, 100] {
            assert_eq!(Outcome::evaluate(secret, secret), Outcome::Correct);
            assert!(Outcome::evaluate(secret, secret).is_correct());
        }
    }

    #[test]
    fn test_evaluate_ordering() {
        assert_eq!(Outcome::evaluate(73, 50), Outcome::TooLow);
        assert_eq!(Outcome::evaluate(73, 99), Outcome::TooHigh);
        assert_eq!(Outcome::evaluate(1, 2), Outcome::TooHigh);
        assert_eq!(Outcome::evaluate(100, 99), Outcome::TooLow);
    }

    #[test]
    fn test_feedback_messages() {
        assert_eq!(
            Outcome::Correct.feedback_message(42, 42),
            "🎯 Correct! The number was 42"
        );
        assert_eq!(Outcome::TooLow.feedback_message(30, 42), "📈 Too low! (Guess: 30)");
        assert_eq!(Outcome::TooHigh.feedback_message(80, 42), "📉 Too high! (Guess: 80)");
    }

    #[test]
    fn test_outcome_serde() {
        assert_eq!(serde_json::to_string(&Outcome::TooLow).unwrap(), "\"too_low\"");
        assert_eq!(serde_json::to_string(&Outcome::TooHigh).unwrap(), "\"too_high\"");
        assert_eq!(serde_json::to_string(&Outcome::Correct).unwrap(), "\"correct\"");
    }
}
