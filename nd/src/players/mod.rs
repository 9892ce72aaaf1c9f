//! The two players
//!
//! Both roles wrap the same LLM client behind different system prompts.
//! Every model interaction degrades to a deterministic local move, so a
//! started game always makes progress.

mod guesser;
mod parse;
mod setter;

pub use guesser::Guesser;
pub use parse::parse_integer;
pub use setter::Setter;
