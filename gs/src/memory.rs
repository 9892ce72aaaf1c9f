//! Per-role memory log
//!
//! Bounded rolling log of past-game experiences, one JSON file per player
//! role. The capacity is enforced at append time; the oldest entry is
//! evicted once the log is full, so the file never grows past capacity.

use chrono::{DateTime, Utc};
use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A single remembered game experience
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryEntry {
    /// When the experience was recorded
    pub timestamp: DateTime<Utc>,
    /// Summary of the game from this role's perspective
    pub experience: String,
}

/// Bounded per-role experience store
pub struct MemoryStore {
    /// Base path for memory files
    base_path: PathBuf,
    /// Maximum entries kept per role
    max_entries: usize,
}

impl MemoryStore {
    /// Open or create a memory store at the given path
    pub fn open(path: impl AsRef<Path>, max_entries: usize) -> Result<Self> {
        let base_path = path.as_ref().to_path_buf();
        fs::create_dir_all(&base_path).context("Failed to create memory directory")?;
        debug!(?base_path, max_entries, "Opened memory store");
        Ok(Self { base_path, max_entries })
    }

    /// Append one experience for a role, evicting the oldest at capacity
    pub fn append(&self, role: &str, experience: &str) -> Result<()> {
        let mut entries = self.load(role)?;
        if entries.len() >= self.max_entries {
            entries.pop_front();
        }
        entries.push_back(MemoryEntry {
            timestamp: Utc::now(),
            experience: experience.to_string(),
        });
        self.save(role, &entries)?;
        info!(role, count = entries.len(), "Recorded game experience");
        Ok(())
    }

    /// All remembered entries for a role, oldest first
    pub fn load(&self, role: &str) -> Result<VecDeque<MemoryEntry>> {
        let path = self.file_path(role);
        if !path.exists() {
            return Ok(VecDeque::new());
        }
        let content = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Last `n` entries for a role, oldest first
    pub fn recent(&self, role: &str, n: usize) -> Result<Vec<MemoryEntry>> {
        let entries = self.load(role)?;
        let skip = entries.len().saturating_sub(n);
        Ok(entries.into_iter().skip(skip).collect())
    }

    /// Render the last `n` experiences as prompt text
    pub fn recall_text(&self, role: &str, n: usize) -> Result<String> {
        let recent = self.recent(role, n)?;
        if recent.is_empty() {
            return Ok("No previous experience".to_string());
        }
        let lines: Vec<String> = recent
            .iter()
            .enumerate()
            .map(|(i, entry)| format!("Game {}: {}", i + 1, entry.experience))
            .collect();
        Ok(lines.join("\n"))
    }

    fn save(&self, role: &str, entries: &VecDeque<MemoryEntry>) -> Result<()> {
        let path = self.file_path(role);
        let json = serde_json::to_string_pretty(entries)?;
        fs::write(&path, json).context(format!("Failed to write memory file: {}", path.display()))?;
        Ok(())
    }

    fn file_path(&self, role: &str) -> PathBuf {
        self.base_path.join(format!("{}_memory.json", role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tempfile::TempDir;

    #[test]
    fn test_append_and_load() {
        let temp = TempDir::new().unwrap();
        let store = MemoryStore::open(temp.path(), 5).unwrap();

        store.append("guesser", "Won in 4 rounds").unwrap();
        store.append("guesser", "Lost after 10 rounds").unwrap();

        let entries = store.load("guesser").unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].experience, "Won in 4 rounds");
        assert_eq!(entries[1].experience, "Lost after 10 rounds");
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let temp = TempDir::new().unwrap();
        let store = MemoryStore::open(temp.path(), 5).unwrap();

        for i in 1..=7 {
            store.append("setter", &format!("game {}", i)).unwrap();
        }

        let entries = store.load("setter").unwrap();
        assert_eq!(entries.len(), 5);
        assert_eq!(entries[0].experience, "game 3");
        assert_eq!(entries[4].experience, "game 7");
    }

    #[test]
    fn test_recent_returns_tail() {
        let temp = TempDir::new().unwrap();
        let store = MemoryStore::open(temp.path(), 5).unwrap();

        for i in 1..=5 {
            store.append("guesser", &format!("game {}", i)).unwrap();
        }

        let recent = store.recent("guesser", 3).unwrap();
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].experience, "game 3");
        assert_eq!(recent[2].experience, "game 5");

        // Asking for more than stored returns everything
        let all = store.recent("guesser", 10).unwrap();
        assert_eq!(all.len(), 5);
    }

    #[test]
    fn test_recall_text_empty_default() {
        let temp = TempDir::new().unwrap();
        let store = MemoryStore::open(temp.path(), 5).unwrap();

        let text = store.recall_text("guesser", 3).unwrap();
        assert_eq!(text, "No previous experience");
    }

    #[test]
    fn test_recall_text_formatting() {
        let temp = TempDir::new().unwrap();
        let store = MemoryStore::open(temp.path(), 5).unwrap();

        store.append("setter", "Defended 73 for 10 rounds").unwrap();
        store.append("setter", "Lost 42 in 6 rounds").unwrap();

        let text = store.recall_text("setter", 3).unwrap();
        assert_eq!(text, "Game 1: Defended 73 for 10 rounds\nGame 2: Lost 42 in 6 rounds");
    }

    #[test]
    fn test_roles_are_isolated() {
        let temp = TempDir::new().unwrap();
        let store = MemoryStore::open(temp.path(), 5).unwrap();

        store.append("guesser", "guesser memory").unwrap();
        store.append("setter", "setter memory").unwrap();

        assert_eq!(store.load("guesser").unwrap().len(), 1);
        assert_eq!(store.load("setter").unwrap().len(), 1);
        assert!(temp.path().join("guesser_memory.json").exists());
        assert!(temp.path().join("setter_memory.json").exists());
    }

    proptest! {
        #[test]
        fn prop_never_exceeds_capacity(experiences in proptest::collection::vec("[a-z ]{0,40}", 0..20)) {
            let temp = TempDir::new().unwrap();
            let store = MemoryStore::open(temp.path(), 5).unwrap();

            for exp in &experiences {
                store.append("guesser", exp).unwrap();
            }

            let entries = store.load("guesser").unwrap();
            prop_assert_eq!(entries.len(), experiences.len().min(5));
        }
    }
}
