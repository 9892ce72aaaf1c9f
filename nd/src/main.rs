//! NumDuel - Adversarial Number Guessing Duel
//!
//! CLI entry point for playing games and browsing their history.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use colored::*;
use dialoguer::Confirm;
use eyre::{Context, Result, eyre};
use tracing::{debug, info, warn};

use gamestore::{GameRecord, GameStore, MemoryStore, Winner};
use numduel::cli::{Cli, Command, OutputFormat};
use numduel::config::Config;
use numduel::console;
use numduel::game::GameEngine;
use numduel::llm::create_client;
use numduel::players::{Guesser, Setter};
use numduel::prompts::PromptLoader;

fn setup_logging(cli_log_level: Option<&str>) -> Result<()> {
    // Note: Can't log params here since logging isn't initialized yet
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("numduel")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let level = match cli_log_level.map(|s| s.to_uppercase()) {
        Some(s) => match s.as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", s);
                tracing::Level::INFO
            }
        },
        None => tracing::Level::INFO,
    };

    let log_file =
        fs::File::create(log_dir.join("numduel.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    info!(model = %config.llm.model, "NumDuel loaded config");

    debug!(command = ?cli.command, "main: dispatching command");
    match cli.command {
        Some(Command::Play { auto }) => cmd_play(&config, auto).await,
        Some(Command::History { limit, format }) => cmd_history(&config, limit, format),
        Some(Command::Memory { role }) => cmd_memory(&config, &role),
        None => cmd_play(&config, false).await,
    }
}

/// Play games until the user has had enough
async fn cmd_play(config: &Config, auto: bool) -> Result<()> {
    debug!(auto, "cmd_play: called");
    config.validate()?;

    console::banner();
    console::intro(config.game.min_number, config.game.max_number, config.game.max_guesses);

    if auto {
        return run_one_game(config).await;
    }

    let start = Confirm::new()
        .with_prompt("Ready to start?")
        .default(true)
        .interact()
        .context("Failed to read confirmation")?;
    if !start {
        println!("{}", "Until next time.".dimmed());
        return Ok(());
    }

    loop {
        run_one_game(config).await?;

        let again = Confirm::new()
            .with_prompt("Play again?")
            .default(false)
            .interact()
            .context("Failed to read confirmation")?;
        if !again {
            break;
        }
    }
    println!("{}", "Thanks for playing!".dimmed());
    Ok(())
}

/// Build both players, run one game, and persist what happened
async fn run_one_game(config: &Config) -> Result<()> {
    debug!("run_one_game: called");

    let llm = create_client(&config.llm).context("Failed to create LLM client")?;
    let prompts = Arc::new(PromptLoader::new(
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    ));

    let memory = MemoryStore::open(&config.storage.memory_dir, config.memory.max_entries)
        .context("Failed to open memory store")?;

    let recall = |role: &str| match memory.recall_text(role, config.memory.recall) {
        Ok(text) => Some(text),
        Err(e) => {
            warn!(role, error = %e, "Memory recall failed, starting fresh");
            None
        }
    };
    let (setter_experience, guesser_experience) = if config.memory.enabled {
        (recall("setter"), recall("guesser"))
    } else {
        (None, None)
    };

    let setter = Setter::new(Arc::clone(&llm), Arc::clone(&prompts), config, setter_experience)?;
    let guesser = Guesser::new(llm, prompts, config, guesser_experience)?;

    let engine = GameEngine::new(config.game.clone(), config.dialogue.clone(), setter, guesser);
    let record = engine.run().await;

    persist_game(config, &memory, &record);
    Ok(())
}

/// Save the finished game and journal both roles' takeaways
///
/// Failures here are logged and shown, never propagated. The game
/// already happened; losing the record must not look like losing the
/// game.
fn persist_game(config: &Config, memory: &MemoryStore, record: &GameRecord) {
    debug!(game_id = %record.game_id, "persist_game: called");
    match GameStore::open(&config.storage.games_dir) {
        Ok(store) => match store.save(record) {
            Ok(path) => println!("{} {}", "✓ Game saved:".green(), path.display()),
            Err(e) => {
                warn!(error = %e, "Failed to save game record");
                eprintln!("{} {}", "⚠ Could not save game:".yellow(), e);
            }
        },
        Err(e) => {
            warn!(error = %e, "Failed to open game store");
            eprintln!("{} {}", "⚠ Could not save game:".yellow(), e);
        }
    }

    if !config.memory.enabled {
        return;
    }
    let (setter_note, guesser_note) = experience_notes(record);
    for (role, note) in [("setter", setter_note), ("guesser", guesser_note)] {
        if let Err(e) = memory.append(role, &note) {
            warn!(role, error = %e, "Failed to record experience");
        }
    }
}

/// One-line takeaway per role for the memory journal
fn experience_notes(record: &GameRecord) -> (String, String) {
    let setter_note = match record.winner {
        Winner::Setter => format!(
            "Defended {} for all {} guesses; vague hints that never lie hold up",
            record.secret_number, record.total_rounds
        ),
        Winner::Guesser => format!(
            "Lost {} in {} rounds; pick numbers bisection reaches late",
            record.secret_number, record.total_rounds
        ),
    };
    let guesser_note = match record.winner {
        Winner::Guesser => format!(
            "Found {} in {} rounds; bisection on honest feedback did the work",
            record.secret_number, record.total_rounds
        ),
        Winner::Setter => format!(
            "Never found {} in {} rounds; trust too-low/too-high over hints",
            record.secret_number, record.total_rounds
        ),
    };
    (setter_note, guesser_note)
}

/// Show past game results
fn cmd_history(config: &Config, limit: usize, format: OutputFormat) -> Result<()> {
    debug!(limit, ?format, "cmd_history: called");
    let store = GameStore::open(&config.storage.games_dir).context("Failed to open game store")?;
    let records = store.list()?;

    match format {
        OutputFormat::Json => {
            let shown: Vec<&GameRecord> = records.iter().take(limit).collect();
            println!("{}", serde_json::to_string_pretty(&shown)?);
        }
        OutputFormat::Text => {
            if records.is_empty() {
                println!("No games played yet");
                return Ok(());
            }
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
            let stats = store.stats()?;
            println!();
            println!(
                "{}",
                format!(
                    "{} games  guesser {}  setter {}  avg {:.1} rounds",
                    stats.game_count, stats.guesser_wins, stats.setter_wins, stats.avg_rounds
                )
                .dimmed()
            );
        }
    }
    Ok(())
}

/// Show a role's remembered experience
fn cmd_memory(config: &Config, role: &str) -> Result<()> {
    debug!(role, "cmd_memory: called");
    if role != "setter" && role != "guesser" {
        return Err(eyre!("Unknown role: {}. Use: setter or guesser", role));
    }

    let memory = MemoryStore::open(&config.storage.memory_dir, config.memory.max_entries)
        .context("Failed to open memory store")?;
    let entries = memory.recent(role, config.memory.max_entries)?;
    if entries.is_empty() {
        println!("No memories for role: {}", role);
        return Ok(());
    }
    for entry in entries {
        println!(
            "{}  {}",
            entry.timestamp.format("%Y-%m-%d %H:%M").to_string().dimmed(),
            entry.experience
        );
    }
    Ok(())
}
