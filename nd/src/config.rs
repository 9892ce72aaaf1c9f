//! numduel configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main numduel configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// LLM provider configuration
    pub llm: LlmConfig,

    /// Game bounds and pacing
    pub game: GameConfig,

    /// Hint and analysis cadence
    pub dialogue: DialogueConfig,

    /// Storage locations
    pub storage: StorageConfig,

    /// Cross-game memory
    pub memory: MemoryConfig,
}

impl Config {
    /// Validate configuration before use
    ///
    /// Checks the API key environment variable and the game parameters.
    /// Call this early in startup to fail fast with clear error messages.
    pub fn validate(&self) -> Result<()> {
        if std::env::var(&self.llm.api_key_env).is_err() {
            return Err(eyre::eyre!(
                "LLM API key not found. Set the {} environment variable.",
                self.llm.api_key_env
            ));
        }
        if self.game.min_number > self.game.max_number {
            return Err(eyre::eyre!(
                "Invalid game range: min-number {} exceeds max-number {}",
                self.game.min_number,
                self.game.max_number
            ));
        }
        if self.game.max_guesses == 0 {
            return Err(eyre::eyre!("max-guesses must be at least 1"));
        }
        if self.dialogue.hint_every == 0 || self.dialogue.analysis_every == 0 {
            return Err(eyre::eyre!("hint-every and analysis-every must be at least 1"));
        }
        Ok(())
    }

    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try project-local config: .numduel.yml
        let local_config = PathBuf::from(".numduel.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        // Try user config: ~/.config/numduel/numduel.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("numduel").join("numduel.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        // No config file found, use defaults
        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

/// LLM provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Provider name (currently only "openai" supported)
    pub provider: String,

    /// Model identifier
    pub model: String,

    /// Environment variable containing the API key
    #[serde(rename = "api-key-env")]
    pub api_key_env: String,

    /// API base URL
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Maximum tokens per response
    #[serde(rename = "max-tokens")]
    pub max_tokens: u32,

    /// Sampling temperature
    pub temperature: f32,

    /// Request timeout in milliseconds
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,
}

impl LlmConfig {
    /// Read the API key from the configured environment variable
    pub fn api_key(&self) -> Result<String> {
        std::env::var(&self.api_key_env).context(format!("Environment variable {} not set", self.api_key_env))
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "openai".to_string(),
            model: "deepseek-chat".to_string(),
            api_key_env: "DEEPSEEK_API_KEY".to_string(),
            base_url: "https://api.deepseek.com".to_string(),
            max_tokens: 1000,
            temperature: 0.8,
            timeout_ms: 60_000,
        }
    }
}

/// Game bounds and pacing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Smallest possible secret
    #[serde(rename = "min-number")]
    pub min_number: i64,

    /// Largest possible secret
    #[serde(rename = "max-number")]
    pub max_number: i64,

    /// Guesses the guesser gets before losing
    #[serde(rename = "max-guesses")]
    pub max_guesses: u32,

    /// Pause after the secret is chosen, in milliseconds
    #[serde(rename = "start-delay-ms")]
    pub start_delay_ms: u64,

    /// Pause between rounds, in milliseconds
    #[serde(rename = "round-delay-ms")]
    pub round_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_number: 1,
            max_number: 100,
            max_guesses: 10,
            start_delay_ms: 2000,
            round_delay_ms: 1500,
        }
    }
}

/// Hint and analysis cadence
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogueConfig {
    /// Whether the setter gives hints at all
    #[serde(rename = "enable-hints")]
    pub enable_hints: bool,

    /// Give a hint every N rounds
    #[serde(rename = "hint-every")]
    pub hint_every: u32,

    /// Whether the guesser analyzes setter strategy
    #[serde(rename = "enable-analysis")]
    pub enable_analysis: bool,

    /// Analyze every N rounds
    #[serde(rename = "analysis-every")]
    pub analysis_every: u32,

    /// Word cap instruction for hints and analysis
    #[serde(rename = "max-words")]
    pub max_words: u32,
}

impl Default for DialogueConfig {
    fn default() -> Self {
        Self {
            enable_hints: true,
            hint_every: 2,
            enable_analysis: true,
            analysis_every: 3,
            max_words: 150,
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory for completed game records
    #[serde(rename = "games-dir")]
    pub games_dir: PathBuf,

    /// Directory for role memory files
    #[serde(rename = "memory-dir")]
    pub memory_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            games_dir: gamestore::default_data_dir().join("games"),
            memory_dir: gamestore::default_data_dir().join("memory"),
        }
    }
}

/// Cross-game memory configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// Whether experiences are recorded and recalled
    pub enabled: bool,

    /// Maximum remembered experiences per role
    #[serde(rename = "max-entries")]
    pub max_entries: usize,

    /// Experiences recalled into system prompts
    pub recall: usize,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_entries: gamestore::DEFAULT_MAX_MEMORY_ENTRIES,
            recall: gamestore::DEFAULT_MEMORY_RECALL,
        }
    }
}
