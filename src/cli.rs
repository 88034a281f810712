// CLI module - command-line argument parsing and handlers
//
// The bare invocation (no subcommand) is the statusLine entry point: Claude
// Code pipes a JSON payload on stdin and expects one line on stdout. The
// subcommands are for humans poking at the pet from a shell:
// - status: render the pet without feeding it
// - reset: hatch a fresh pet
// - config --show / --reset / --path: configuration management

use crate::config::{Config, VERSION};
use crate::pet::PetManager;
use clap::{Parser, Subcommand};

/// Claude Pet - virtual pet status line for Claude Code
#[derive(Parser)]
#[command(name = "claude-pet")]
#[command(version = VERSION)]
#[command(about = "Virtual pet status line for Claude Code", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the pet without feeding it (read-only render)
    Status,

    /// Reset the pet to full energy
    Reset,

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

/// Handle CLI subcommands. Returns true if a command was handled (exit after).
pub fn handle_cli() -> bool {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Status) => {
            handle_status();
            true
        }
        Some(Commands::Reset) => {
            handle_reset();
            true
        }
        Some(Commands::Config { show, reset, path }) => {
            if path {
                handle_config_path();
            } else if show {
                handle_config_show();
            } else if reset {
                handle_config_reset();
            } else {
                // No flag provided, show help
                println!("Usage: claude-pet config [--show|--reset|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --path    Show config file path");
            }
            true
        }
        None => false, // No subcommand, run the statusLine cycle
    }
}

fn handle_status() {
    let manager = PetManager::new(Config::from_env());
    println!("{}", manager.status_display());
}

fn handle_reset() {
    let mut manager = PetManager::new(Config::from_env());
    manager.reset();
    println!("{}", manager.status_display());
}

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    println!("decay_per_hour = {}", config.decay_per_hour);
    println!("energy_per_token = {}", config.energy_per_token);
    println!("state_file = {:?}", config.state_file.display().to_string());
    println!();
    println!("[logging]");
    println!("level = {:?}", config.logging.level);

    // Show source info
    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    // Create parent directory
    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            std::process::exit(1);
        }
    }

    // Write the default config (using Config's single source of truth)
    if let Err(e) = std::fs::write(&path, Config::default().to_toml()) {
        eprintln!("Error writing config: {}", e);
        std::process::exit(1);
    }

    println!("Config reset to defaults: {}", path.display());
}
