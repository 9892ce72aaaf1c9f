//! Prompt Template System
//!
//! Loads and renders `.pmt` (prompt template) files for both player roles.
//!
//! Template loading chain:
//! 1. `.numduel/prompts/{name}.pmt` (user override)
//! 2. `prompts/{name}.pmt` (repo default)
//! 3. Embedded fallback in code
//!
//! Templates use Handlebars syntax for variable substitution.

pub mod embedded;
mod loader;

pub use loader::{
    AnalyzeContext, GuessContext, HintContext, PromptLoader, SecretContext, SystemContext,
};
