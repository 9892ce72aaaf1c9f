//! GameStore - game history and role memory for numduel
//!
//! Stores one JSON record per completed game plus a bounded rolling log of
//! experiences per player role, so future games can be primed with what
//! each role learned before.
//!
//! # Architecture
//!
//! ```text
//! {data_dir}/numduel/
//! ├── games/
//! │   ├── game_20250101_120000.json
//! │   └── game_20250102_090000.json
//! └── memory/
//!     ├── guesser_memory.json
//!     └── setter_memory.json
//! ```
//!
//! # Example
//!
//! ```ignore
//! use gamestore::{GameRecord, GameStore, Winner};
//!
//! let store = GameStore::open("game_history")?;
//! let record = GameRecord::new(Winner::Guesser, 42).with_total_rounds(4);
//! store.save(&record)?;
//! let latest = store.latest()?;
//! ```

pub mod cli;
pub mod config;
mod memory;
mod record;
mod store;

pub use memory::{MemoryEntry, MemoryStore};
pub use record::{GameRecord, Winner};
pub use store::{GameStore, StoreStats};

use std::path::PathBuf;

/// Maximum remembered experiences per role
pub const DEFAULT_MAX_MEMORY_ENTRIES: usize = 5;

/// Experiences recalled into prompts
pub const DEFAULT_MEMORY_RECALL: usize = 3;

/// Shared data directory for game history and role memory
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("numduel")
}
