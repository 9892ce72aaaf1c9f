//! Game history store
//!
//! One pretty-printed JSON file per completed game, named after the
//! record's timestamp. Games are never rewritten once saved.

use crate::record::{GameRecord, Winner};
use eyre::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Aggregate statistics over stored games
#[derive(Debug, Clone)]
pub struct StoreStats {
    /// Number of stored games
    pub game_count: usize,
    /// Games won by the guesser
    pub guesser_wins: usize,
    /// Games won by the setter
    pub setter_wins: usize,
    /// Mean rounds per game
    pub avg_rounds: f64,
}

/// Directory-backed store of completed game records
pub struct GameStore {
    /// Base path for storage
    base_path: PathBuf,
}

impl GameStore {
    /// Open or create a game store at the given path
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let base_path = path.as_ref().to_path_buf();
        fs::create_dir_all(&base_path).context("Failed to create game history directory")?;
        debug!(?base_path, "Opened game store");
        Ok(Self { base_path })
    }

    /// Save a completed game record
    pub fn save(&self, record: &GameRecord) -> Result<PathBuf> {
        let path = self.base_path.join(record.file_name());
        let json = serde_json::to_string_pretty(record)?;
        fs::write(&path, json).context(format!("Failed to write game record: {}", path.display()))?;
        info!(game_id = %record.game_id, path = %path.display(), "Saved game record");
        Ok(path)
    }

    /// List all stored games, newest first. Unreadable files are skipped.
    pub fn list(&self) -> Result<Vec<GameRecord>> {
        let mut records = Vec::new();

        for entry in fs::read_dir(&self.base_path)? {
            let entry = entry?;
            let path = entry.path();
            if !is_game_file(&path) {
                continue;
            }
            match read_record(&path) {
                Ok(record) => records.push(record),
                Err(e) => warn!(path = %path.display(), error = %e, "Skipping unreadable game file"),
            }
        }

        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(records)
    }

    /// Load a game by file stem (e.g. "game_20250101_120000")
    pub fn load(&self, name: &str) -> Result<GameRecord> {
        let path = self.base_path.join(format!("{}.json", name.trim_end_matches(".json")));
        read_record(&path).context(format!("Game not found: {}", name))
    }

    /// Most recently completed game, if any
    pub fn latest(&self) -> Result<Option<GameRecord>> {
        Ok(self.list()?.into_iter().next())
    }

    /// Delete a stored game by file stem
    pub fn delete(&self, name: &str) -> Result<()> {
        let path = self.base_path.join(format!("{}.json", name.trim_end_matches(".json")));
        if path.exists() {
            fs::remove_file(&path)?;
            info!(name, "Deleted game record");
        }
        Ok(())
    }

    /// Aggregate statistics over all stored games
    pub fn stats(&self) -> Result<StoreStats> {
        let records = self.list()?;
        let game_count = records.len();
        let guesser_wins = records.iter().filter(|r| r.winner == Winner::Guesser).count();
        let setter_wins = records.iter().filter(|r| r.winner == Winner::Setter).count();
        let total_rounds: u64 = records.iter().map(|r| r.total_rounds as u64).sum();
        let avg_rounds = if game_count > 0 {
            total_rounds as f64 / game_count as f64
        } else {
            0.0
        };

        Ok(StoreStats {
            game_count,
            guesser_wins,
            setter_wins,
            avg_rounds,
        })
    }
}

/// Game files are `game_{timestamp}.json`; anything else in the directory is ignored
fn is_game_file(path: &Path) -> bool {
    path.extension().map(|e| e == "json").unwrap_or(false)
        && path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.starts_with("game_"))
            .unwrap_or(false)
}

fn read_record(path: &Path) -> Result<GameRecord> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
