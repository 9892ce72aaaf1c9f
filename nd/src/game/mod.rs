//! Game core: feedback evaluation, range tracking, round orchestration

pub mod engine;
pub mod interval;
pub mod outcome;

pub use engine::{GameEngine, GamePhase, RoundRecord};
pub use interval::SearchInterval;
pub use outcome::Outcome;
