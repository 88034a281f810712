// Claude Pet - Virtual Pet Status Line for Claude Code
//
// A tiny tamagotchi that lives in the status line. It feeds on the tokens
// your sessions consume and gets hungry while you're away.
//
// Architecture:
// - Pet: decay/feed state machine plus rendering (the core)
// - Transcript: sums token usage from the session's JSONL log
// - Config: env > file > defaults tunables
// - CLI (clap): status/reset/config subcommands for shell use
//
// The statusLine contract: Claude Code pipes a JSON payload on stdin and
// prints whatever we write to stdout. Logs therefore go to stderr, and no
// failure mode is allowed to replace the status line with an error.

mod cli;
mod config;
mod input;
mod pet;
mod transcript;

use anyhow::Result;
use config::Config;
use input::StatusInput;
use pet::PetManager;
use tokio::io::AsyncReadExt;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Handle CLI subcommands first (status, reset, config --show, ...)
    // If a command was handled, exit early
    if cli::handle_cli() {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::from_env();

    // Initialize tracing to stderr - stdout belongs to the status line.
    // Precedence: RUST_LOG env var > config file > default "warn"
    let default_filter = format!("claude_pet={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Read the host payload from stdin. An empty or malformed payload is not
    // fatal: the pet just renders without an update cycle.
    let mut raw = String::new();
    if let Err(e) = tokio::io::stdin().read_to_string(&mut raw).await {
        tracing::warn!("Could not read stdin payload: {}", e);
    }

    let input: StatusInput = match serde_json::from_str(&raw) {
        Ok(input) => input,
        Err(e) => {
            tracing::warn!("Malformed host payload: {}", e);
            StatusInput::default()
        }
    };

    let mut manager = PetManager::new(config);
    let display = manager.process_tokens(&input).await;
    println!("{}", display);

    Ok(())
}
