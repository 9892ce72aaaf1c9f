//! Configuration for gamestore

use eyre::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the game history directory
    #[serde(default = "default_games_dir")]
    pub games_dir: PathBuf,

    /// Path to the role memory directory
    #[serde(default = "default_memory_dir")]
    pub memory_dir: PathBuf,

    /// Maximum remembered experiences per role
    #[serde(default = "default_max_memory_entries")]
    pub max_memory_entries: usize,

    /// Experiences recalled per role
    #[serde(default = "default_memory_recall")]
    pub memory_recall: usize,
}

fn default_games_dir() -> PathBuf {
    crate::default_data_dir().join("games")
}

fn default_memory_dir() -> PathBuf {
    crate::default_data_dir().join("memory")
}

fn default_max_memory_entries() -> usize {
    crate::DEFAULT_MAX_MEMORY_ENTRIES
}

fn default_memory_recall() -> usize {
    crate::DEFAULT_MEMORY_RECALL
}

impl Default for Config {
    fn default() -> Self {
        Self {
            games_dir: default_games_dir(),
            memory_dir: default_memory_dir(),
            max_memory_entries: default_max_memory_entries(),
            memory_recall: default_memory_recall(),
        }
    }
}

impl Config {
    /// Load config from file, or use defaults
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_yaml::from_str(&content)?;
            return Ok(config);
        }

        // Try default locations
        let default_paths = [
            dirs::config_dir().map(|p| p.join("gamestore").join("config.yml")),
            Some(PathBuf::from("gamestore.yml")),
        ];

        for path in default_paths.iter().flatten() {
            if path.exists() {
                let content = std::fs::read_to_string(path)?;
                let config: Config = serde_yaml::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Config::default())
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
