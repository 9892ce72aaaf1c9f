use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;

use gamestore::cli::Cli;
use gamestore::config::Config;
use gamestore::{GameStore, MemoryStore};

fn setup_logging() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("gamestore starting");

    match cli.command {
        gamestore::cli::Command::List { limit } => {
            let store = GameStore::open(&config.games_dir)?;
            let records = store.list()?;
            if records.is_empty() {
                println!("No games found");
            } else {
                for record in records.iter().take(limit) {
                    println!(
                        "{}  {} won  secret {}  {} rounds  {}s",
                        record.timestamp.yellow(),
                        record.winner.to_string().cyan(),
                        record.secret_number,
                        record.total_rounds,
                        record.duration_seconds
                    );
                }
            }
        }
        gamestore::cli::Command::Show { name } => {
            let store = GameStore::open(&config.games_dir)?;
            let record = store.load(&name)?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        gamestore::cli::Command::Latest => {
            let store = GameStore::open(&config.games_dir)?;
            match store.latest()? {
                Some(record) => println!("{}", serde_json::to_string_pretty(&record)?),
                None => println!("No games found"),
            }
        }
        gamestore::cli::Command::Stats => {
            let store = GameStore::open(&config.games_dir)?;
            let stats = store.stats()?;
            println!("Games: {}", stats.game_count);
            println!("  Guesser wins: {}", stats.guesser_wins);
            println!("  Setter wins: {}", stats.setter_wins);
            println!("  Average rounds: {:.1}", stats.avg_rounds);
        }
        gamestore::cli::Command::Delete { name } => {
            let store = GameStore::open(&config.games_dir)?;
            store.delete(&name)?;
            println!("{} Deleted game: {}", "✓".green(), name);
        }
        gamestore::cli::Command::Memory { role } => {
            let store = MemoryStore::open(&config.memory_dir, config.max_memory_entries)?;
            let entries = store.load(&role)?;
            if entries.is_empty() {
                println!("No memories for role: {}", role);
            } else {
                for entry in entries {
                    println!(
                        "{}  {}",
                        entry.timestamp.format("%Y-%m-%d %H:%M").to_string().dimmed(),
                        entry.experience
                    );
                }
            }
        }
    }

    Ok(())
}
