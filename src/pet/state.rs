// Pet state model and persistence
//
// One pet per user, persisted as pretty-printed JSON at a fixed per-user
// location: ~/.claude-pet/pet-state.json. Field names are camelCase on disk
// to stay compatible with the existing state-file format.
//
// Persistence is deliberately non-fatal in both directions: a missing,
// unreadable, or unparseable file loads as default state, and a failed write
// leaves the file stale while in-memory state stays correct. The status line
// must never crash the host over filesystem trouble.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Highest possible energy
pub const MAX_ENERGY: f64 = 100.0;

/// Lowest possible energy
pub const MIN_ENERGY: f64 = 0.0;

/// Persisted pet state, single instance per user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetState {
    /// Vitality, clamped to [0, 100] after every mutation
    pub energy: f64,

    /// Mood glyph, always consistent with `energy` per the band mapping
    pub expression: String,

    /// Last moment energy was adjusted (feed or decay); only moves forward
    pub last_feed_time: DateTime<Utc>,

    /// All tokens ever credited to the pet; only increases
    pub total_tokens_consumed: u64,
}

impl PetState {
    /// Fresh pet: full energy, fed right now
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            energy: MAX_ENERGY,
            expression: crate::pet::render::expression_for(MAX_ENERGY).to_string(),
            last_feed_time: now,
            total_tokens_consumed: 0,
        }
    }

    /// Clamp energy into the valid [0, 100] domain
    pub fn clamp_energy(energy: f64) -> f64 {
        energy.clamp(MIN_ENERGY, MAX_ENERGY)
    }
}

/// Default state file path: ~/.claude-pet/pet-state.json
///
/// Falls back to a relative path if the home directory cannot be determined
/// (rare, but the status line still has to produce output).
pub fn default_state_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".claude-pet")
        .join("pet-state.json")
}

/// Load state from `path`, or return default state
///
/// Missing file or directory is the normal first-run case. Read or parse
/// failures are absorbed: a corrupt state file means the pet starts over,
/// never that the host sees an error.
pub fn load(path: &Path, now: DateTime<Utc>) -> PetState {
    match std::fs::read_to_string(path) {
        Ok(contents) => match serde_json::from_str(&contents) {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!("Unparseable pet state at {}: {}", path.display(), e);
                PetState::new(now)
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => PetState::new(now),
        Err(e) => {
            tracing::warn!("Could not read pet state at {}: {}", path.display(), e);
            PetState::new(now)
        }
    }
}

/// Save state to `path` as pretty-printed JSON
///
/// Creates the parent directory if absent. All failures are swallowed after
/// logging; callers never observe an error from persistence.
pub fn save(path: &Path, state: &PetState) {
    if let Err(e) = try_save(path, state) {
        tracing::warn!("Could not save pet state to {}: {}", path.display(), e);
    }
}

fn try_save(path: &Path, state: &PetState) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    // to_string_pretty only fails on non-string map keys, which PetState
    // doesn't have, but route it through io::Error anyway
    let json = serde_json::to_string_pretty(state).map_err(std::io::Error::other)?;
    std::fs::write(path, json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn state_path(dir: &TempDir) -> PathBuf {
        dir.path().join("pet-state.json")
    }

    #[test]
    fn test_default_state() {
        let now = Utc::now();
        let state = PetState::new(now);
        assert_eq!(state.energy, 100.0);
        assert_eq!(state.expression, "(^_^)");
        assert_eq!(state.last_feed_time, now);
        assert_eq!(state.total_tokens_consumed, 0);
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let dir = TempDir::new().unwrap();
        let now = Utc::now();
        let state = load(&state_path(&dir), now);
        assert_eq!(state, PetState::new(now));
    }

    #[test]
    fn test_load_missing_parent_dir_returns_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no-such-dir").join("pet-state.json");
        let now = Utc::now();
        assert_eq!(load(&path, now), PetState::new(now));
    }

    #[test]
    fn test_load_corrupt_file_returns_default() {
        let dir = TempDir::new().unwrap();
        let path = state_path(&dir);
        std::fs::write(&path, "{ not json at all").unwrap();
        let now = Utc::now();
        assert_eq!(load(&path, now), PetState::new(now));
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = state_path(&dir);
        let state = PetState {
            energy: 42.5,
            expression: "(o_o)".to_string(),
            last_feed_time: "2026-08-24T12:00:00Z".parse().unwrap(),
            total_tokens_consumed: 1234,
        };
        save(&path, &state);
        let loaded = load(&path, Utc::now());
        assert_eq!(loaded, state);
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("pet-state.json");
        let state = PetState::new(Utc::now());
        save(&path, &state);
        assert!(path.exists());
    }

    #[test]
    fn test_save_failure_is_swallowed() {
        // A directory where the file should be makes the write fail
        let dir = TempDir::new().unwrap();
        let path = state_path(&dir);
        std::fs::create_dir_all(&path).unwrap();
        save(&path, &PetState::new(Utc::now())); // must not panic
    }

    #[test]
    fn test_persisted_json_uses_camel_case_keys() {
        let dir = TempDir::new().unwrap();
        let path = state_path(&dir);
        save(&path, &PetState::new(Utc::now()));
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"energy\""));
        assert!(raw.contains("\"expression\""));
        assert!(raw.contains("\"lastFeedTime\""));
        assert!(raw.contains("\"totalTokensConsumed\""));
    }

    #[test]
    fn test_last_feed_time_is_iso8601_on_disk() {
        let dir = TempDir::new().unwrap();
        let path = state_path(&dir);
        let state = PetState {
            last_feed_time: "2026-08-24T12:00:00Z".parse().unwrap(),
            ..PetState::new(Utc::now())
        };
        save(&path, &state);
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("2026-08-24T12:00:00Z"));
    }

    #[test]
    fn test_clamp_energy() {
        assert_eq!(PetState::clamp_energy(-5.0), 0.0);
        assert_eq!(PetState::clamp_energy(0.0), 0.0);
        assert_eq!(PetState::clamp_energy(55.5), 55.5);
        assert_eq!(PetState::clamp_energy(100.0), 100.0);
        assert_eq!(PetState::clamp_energy(250.0), 100.0);
    }
}
