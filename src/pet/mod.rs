// Pet module - the decay/feed state machine behind the status line
//
// The pet's whole life cycle runs through PetManager:
// - Construction loads persisted state (or hatches a fresh pet).
// - process_tokens() runs one update cycle: decay since the last feed,
//   credit token-derived energy, clamp, re-select the expression, persist,
//   and render the display line.
// - status_display() is the read-only path: render without touching state.
//
// Failure policy is graceful degradation all the way down. A broken
// transcript aborts the cycle with the prior display; a broken state file
// never surfaces past the persistence layer. The pet must not be the reason
// the status line crashes.

pub mod render;
pub mod state;

use crate::config::Config;
use crate::input::StatusInput;
use crate::transcript;
use crate::transcript::models::TokenMetrics;
use chrono::{DateTime, Utc};
use state::PetState;
use std::path::Path;

/// Owns the single pet state instance and drives its update cycle
pub struct PetManager {
    config: Config,
    state: PetState,
}

impl PetManager {
    /// Load the persisted pet (or a fresh one) from the configured state file
    pub fn new(config: Config) -> Self {
        let state = state::load(&config.state_file, Utc::now());
        Self { config, state }
    }

    /// Current state, read-only
    pub fn state(&self) -> &PetState {
        &self.state
    }

    /// Pure render of current state; no mutation, no I/O
    pub fn status_display(&self) -> String {
        render::display_line(&self.state.expression, self.state.energy)
    }

    /// Run the full decay/feed/persist cycle and return the display line
    ///
    /// If token metrics can't be fetched (missing transcript path, unreadable
    /// file), the cycle degrades to a no-op: no decay, no gain, no save, and
    /// the caller gets the prior state's rendering.
    pub async fn process_tokens(&mut self, input: &StatusInput) -> String {
        self.process_tokens_at(input, Utc::now()).await
    }

    /// Same as process_tokens, with an explicit "now" for deterministic tests
    async fn process_tokens_at(&mut self, input: &StatusInput, now: DateTime<Utc>) -> String {
        // Fetch metrics before touching state: a failed fetch must leave the
        // pet exactly as it was, decay anchor included. Otherwise a string of
        // broken transcripts would starve the pet without ever feeding it.
        let Some(transcript_path) = input.transcript_path.as_deref() else {
            tracing::debug!("No transcript path in payload, skipping update");
            return self.status_display();
        };

        let metrics = match transcript::fetch_token_metrics(Path::new(transcript_path)).await {
            Ok(metrics) => metrics,
            Err(e) => {
                tracing::debug!("Token metrics unavailable, skipping update: {:#}", e);
                return self.status_display();
            }
        };

        apply_update(&mut self.state, &self.config, metrics, now);
        self.save_state();
        self.status_display()
    }

    /// Explicit persistence trigger; failures are swallowed per the
    /// persistence contract
    pub fn save_state(&self) {
        state::save(&self.config.state_file, &self.state);
    }

    /// Reset to a fresh pet and persist
    pub fn reset(&mut self) {
        self.state = PetState::new(Utc::now());
        self.save_state();
    }
}

/// One decay-and-feed pass over the state
///
/// Decay is linear in elapsed time since the last feed (a timestamp from the
/// future counts as zero elapsed). Gain is `total_tokens * energy_per_token`.
/// The anchor moves to `now` on every pass, including zero-token ones, so the
/// same idle window is never decayed twice.
fn apply_update(state: &mut PetState, config: &Config, metrics: TokenMetrics, now: DateTime<Utc>) {
    let elapsed_hours =
        (now - state.last_feed_time).num_milliseconds().max(0) as f64 / (1000.0 * 3600.0);

    let decayed = PetState::clamp_energy(state.energy - elapsed_hours * config.decay_per_hour);
    let gain = metrics.total_tokens as f64 * config.energy_per_token;

    state.energy = PetState::clamp_energy(decayed + gain);
    state.expression = render::expression_for(state.energy).to_string();
    state.last_feed_time = now;
    state.total_tokens_consumed += metrics.total_tokens;
}
