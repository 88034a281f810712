// Configuration for the pet status line
//
// Configuration is loaded in order of precedence:
// 1. Environment variables (highest priority)
// 2. Config file (~/.config/claude-pet/config.toml)
// 3. Built-in defaults (lowest priority)
//
// The decay rate and feed ratio are tunables, not protocol: changing them
// reshapes the pet's temperament but never the display contract.

use serde::Deserialize;
use std::path::PathBuf;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default decay: 10 energy per idle hour, so a full pet drains in 10 hours
pub const DEFAULT_DECAY_PER_HOUR: f64 = 10.0;

/// Default feed ratio: 0.1 energy per token
pub const DEFAULT_ENERGY_PER_TOKEN: f64 = 0.1;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            // warn by default: logs go to stderr and the status line should
            // stay quiet unless something is actually wrong
            level: "warn".to_string(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Energy lost per hour of idle time
    pub decay_per_hour: f64,

    /// Energy gained per token consumed
    pub energy_per_token: f64,

    /// Where the pet state lives (default: ~/.claude-pet/pet-state.json)
    pub state_file: PathBuf,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Logging settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
struct FileLogging {
    level: Option<String>,
}

/// Config file structure (subset of Config that makes sense to persist)
#[derive(Debug, Deserialize, Default)]
struct FileConfig {
    decay_per_hour: Option<f64>,
    energy_per_token: Option<f64>,
    state_file: Option<String>,

    /// Optional [logging] section
    logging: Option<FileLogging>,
}

impl Config {
    /// Get the config file path: ~/.config/claude-pet/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("claude-pet").join("config.toml"))
    }

    /// Create config template if it doesn't exist
    /// Helps users discover the tunables without documentation spelunking
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        // Create parent directory
        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Silently fail - config is optional
            }
        }

        let template = r#"# claude-pet configuration
# Uncomment and modify options as needed

# Energy lost per hour of idle time (default: 10.0)
# decay_per_hour = 10.0

# Energy gained per token consumed (default: 0.1)
# energy_per_token = 0.1

# Pet state file location (default: ~/.claude-pet/pet-state.json)
# state_file = "/home/me/.claude-pet/pet-state.json"

# Logging configuration (logs go to stderr; RUST_LOG env var overrides)
# [logging]
# level = "warn"  # trace, debug, info, warn, error
"#;

        // Write template (ignore errors - config is optional)
        let _ = std::fs::write(&path, template);
    }

    /// Load file config if it exists
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
                eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                FileConfig::default()
            }),
            Err(_) => FileConfig::default(), // File doesn't exist, use defaults
        }
    }

    /// Serialize config to TOML string (single source of truth for format)
    pub fn to_toml(&self) -> String {
        format!(
            r#"# claude-pet configuration

# Energy lost per hour of idle time
decay_per_hour = {decay}

# Energy gained per token consumed
energy_per_token = {ratio}

# Pet state file location
state_file = "{state_file}"

# Logging configuration (logs go to stderr; RUST_LOG env var overrides)
[logging]
level = "{log_level}"
"#,
            decay = self.decay_per_hour,
            ratio = self.energy_per_token,
            state_file = self.state_file.display(),
            log_level = self.logging.level,
        )
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn from_env() -> Self {
        let file = Self::load_file_config();

        // Decay rate: env > file > default
        let decay_per_hour = std::env::var("CLAUDE_PET_DECAY_PER_HOUR")
            .ok()
            .and_then(|v| v.parse().ok())
            .or(file.decay_per_hour)
            .unwrap_or(DEFAULT_DECAY_PER_HOUR);

        // Feed ratio: env > file > default
        let energy_per_token = std::env::var("CLAUDE_PET_ENERGY_PER_TOKEN")
            .ok()
            .and_then(|v| v.parse().ok())
            .or(file.energy_per_token)
            .unwrap_or(DEFAULT_ENERGY_PER_TOKEN);

        // State file: env > file > default
        let state_file = std::env::var("CLAUDE_PET_STATE_FILE")
            .ok()
            .or(file.state_file)
            .map(PathBuf::from)
            .unwrap_or_else(crate::pet::state::default_state_path);

        // Logging settings: file config only (RUST_LOG env var handled in main.rs)
        let file_logging = file.logging.unwrap_or_default();
        let logging = LoggingConfig {
            level: file_logging.level.unwrap_or_else(|| "warn".to_string()),
        };

        Self {
            decay_per_hour,
            energy_per_token,
            state_file,
            logging,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            decay_per_hour: DEFAULT_DECAY_PER_HOUR,
            energy_per_token: DEFAULT_ENERGY_PER_TOKEN,
            state_file: crate::pet::state::default_state_path(),
            logging: LoggingConfig::default(),
        }
    }
}
