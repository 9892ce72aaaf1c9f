//! Prompt Loader
//!
//! Loads prompt templates from files or falls back to embedded defaults,
//! then renders them with Handlebars.

use std::path::{Path, PathBuf};

use eyre::{Result, eyre};
use handlebars::Handlebars;
use serde::Serialize;
use tracing::debug;

use super::embedded;

/// Context for the role system prompts
#[derive(Debug, Clone, Serialize)]
pub struct SystemContext {
    pub min: i64,
    pub max: i64,
    pub max_guesses: u32,
    /// Recalled memory text, absent when memory is disabled
    pub experience: Option<String>,
}

/// Context for the secret selection prompt
#[derive(Debug, Clone, Serialize)]
pub struct SecretContext {
    pub min: i64,
    pub max: i64,
}

/// Context for the next guess prompt
#[derive(Debug, Clone, Serialize)]
pub struct GuessContext {
    pub min: i64,
    pub max: i64,
    /// One line per past round, guess and feedback
    pub history: String,
    pub remaining: u32,
}

/// Context for the hint prompt
#[derive(Debug, Clone, Serialize)]
pub struct HintContext {
    pub secret: i64,
    pub last_guess: i64,
    pub max_words: u32,
}

/// Context for the hint analysis prompt
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeContext {
    /// One hint per line
    pub hints: String,
    pub max_words: u32,
}

/// Loads and renders prompt templates
pub struct PromptLoader {
    /// Handlebars template engine
    hbs: Handlebars<'static>,
    /// User override directory (`.numduel/prompts/`)
    user_dir: Option<PathBuf>,
    /// Repo default directory (`prompts/`)
    repo_dir: Option<PathBuf>,
}

impl PromptLoader {
    /// Create a prompt loader rooted at the given directory
    ///
    /// Checks for `.numduel/prompts/` (user overrides) and `prompts/`
    /// (repo defaults) under `base`. Missing directories are fine; the
    /// embedded templates always exist.
    pub fn new(base: impl AsRef<Path>) -> Self {
        let base = base.as_ref();
        let user_dir = base.join(".numduel/prompts");
        let repo_dir = base.join("prompts");
        debug!(?user_dir, ?repo_dir, "PromptLoader::new: called");

        Self {
            hbs: Handlebars::new(),
            user_dir: user_dir.exists().then_some(user_dir),
            repo_dir: repo_dir.exists().then_some(repo_dir),
        }
    }

    /// Create a loader that only uses embedded prompts (for testing)
    pub fn embedded_only() -> Self {
        debug!("PromptLoader::embedded_only: called");
        Self {
            hbs: Handlebars::new(),
            user_dir: None,
            repo_dir: None,
        }
    }

    /// Load a template by name
    ///
    /// Checks in order:
    /// 1. User override: `.numduel/prompts/{name}.pmt`
    /// 2. Repo default: `prompts/{name}.pmt`
    /// 3. Embedded fallback
    fn load_template(&self, name: &str) -> Result<String> {
        debug!(%name, "PromptLoader::load_template: called");
        for dir in [&self.user_dir, &self.repo_dir].into_iter().flatten() {
            let path = dir.join(format!("{}.pmt", name));
            if path.exists() {
                debug!(?path, "PromptLoader::load_template: found on disk");
                return std::fs::read_to_string(&path)
                    .map_err(|e| eyre!("Failed to read prompt {}: {}", path.display(), e));
            }
        }

        if let Some(content) = embedded::get_embedded(name) {
            debug!(%name, "PromptLoader::load_template: using embedded");
            return Ok(content.to_string());
        }

        Err(eyre!("Prompt template not found: {}", name))
    }

    /// Render a template with the given context
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        debug!(%template_name, "PromptLoader::render: called");
        let template = self.load_template(template_name)?;
        self.hbs
            .render_template(&template, context)
            .map_err(|e| eyre!("Failed to render template {}: {}", template_name, e))
    }
}
