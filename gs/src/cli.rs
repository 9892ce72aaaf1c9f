//! CLI argument parsing for gamestore

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gs")]
#[command(author, version, about = "Game history and role memory store", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List stored games, newest first
    List {
        /// Maximum games to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Display a stored game record
    Show {
        /// Game file stem (e.g. game_20250101_120000)
        #[arg(required = true)]
        name: String,
    },

    /// Display the most recent game
    Latest,

    /// Show aggregate statistics over stored games
    Stats,

    /// Delete a stored game
    Delete {
        /// Game file stem to delete
        #[arg(required = true)]
        name: String,
    },

    /// Show remembered experiences for a role
    Memory {
        /// Player role (guesser or setter)
        #[arg(required = true)]
        role: String,
    },
}
