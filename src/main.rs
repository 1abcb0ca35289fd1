//! Dog Age Calculator - command-line entry point
//!
//! Converts a dog's birth date into an elapsed-time dog age and a
//! human-equivalent age, and keeps a bounded history of past calculations
//! in local storage.

use std::time::Duration;

use anyhow::Context;
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dog_age::error::DogAgeError;
use dog_age::models::CalculationResult;
use dog_age::{Config, HistoryStore, LocalStore};

#[derive(Parser)]
#[command(name = "dog-age")]
#[command(about = "Converts a dog's birth date into a human-equivalent age")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Calculate ages for a birth date and record the result
    Calc {
        /// Birth date in YYYY-MM-DD format
        birthday: String,
    },
    /// Print recorded calculations, newest first
    History,
    /// Print the most recent calculation, if any
    Last,
    /// Delete all recorded calculations
    Clear,
}

/// Main entry point for the dog age calculator.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Open the local storage directory
/// 4. Dispatch the requested subcommand
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "warn" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dog_age=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: data_dir={}, result_delay_ms={}",
        config.data_dir.display(),
        config.result_delay_ms
    );

    let storage = LocalStore::open(&config.data_dir)
        .with_context(|| format!("Failed to open storage at {}", config.data_dir.display()))?;
    let store = HistoryStore::new(storage);

    match cli.command {
        Command::Calc { birthday } => calc(&store, &birthday, config.result_delay_ms).await?,
        Command::History => print_history(&store),
        Command::Last => print_last(&store),
        Command::Clear => {
            store.clear().context("Failed to clear history")?;
            println!("History cleared.");
        }
    }

    Ok(())
}

/// Computes both ages for the given birth date, shows the result after the
/// configured delay, and records it in the history and last-result slot.
async fn calc(store: &HistoryStore, birthday: &str, delay_ms: u64) -> anyhow::Result<()> {
    let birthday: NaiveDate = birthday
        .parse()
        .map_err(|_| DogAgeError::InvalidDate(birthday.to_string()))?;

    let result = CalculationResult::compute(birthday, Utc::now());

    // Simulated computation delay before revealing the result
    if delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    }

    println!("Dog age: {:.1} years", result.dog_age);
    println!("Human-equivalent age: {:.1} years", result.human_age);
    if result.is_puppy() {
        println!("Note: puppies grow fast; the human-equivalent age is a rough estimate.");
    }

    store.append(&result).context("Failed to save history")?;
    store
        .save_last(&result)
        .context("Failed to save last result")?;

    Ok(())
}

/// Prints all recorded calculations, newest first.
fn print_history(store: &HistoryStore) {
    let entries = store.load_all();
    if entries.is_empty() {
        println!("No calculations recorded.");
        return;
    }

    for entry in &entries {
        println!(
            "{}  birthday {}  dog {} -> human {}",
            entry.timestamp, entry.birthday, entry.dog_age, entry.human_age
        );
    }
}

/// Prints the restored last result, if one was recorded.
fn print_last(store: &HistoryStore) {
    match store.load_last() {
        Some(last) => {
            println!("Birthday: {}", last.birthday);
            println!("Dog age: {} years", last.dog_age);
            println!("Human-equivalent age: {} years", last.human_age);
        }
        None => println!("No previous calculation."),
    }
}
