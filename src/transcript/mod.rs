// Transcript module - extracts token metrics from Claude Code session logs
//
// This is the pet's food source: the host hands us the session's transcript
// path, and we sum token usage across every assistant turn in the file.
//
// The read is the one async boundary in the whole program. An unreadable
// file is an error - the caller treats that as "no metrics available" and
// aborts its update cycle. Individually malformed lines are skipped instead:
// live transcripts routinely have a partial line at the tail while Claude
// Code is mid-write, and that must not starve the pet.

pub mod models;

use anyhow::{Context, Result};
use models::{TokenMetrics, TranscriptEntry};
use std::path::Path;

/// Read a transcript file and sum token usage across assistant entries
pub async fn fetch_token_metrics(path: &Path) -> Result<TokenMetrics> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read transcript {}", path.display()))?;

    Ok(sum_usage(&contents))
}

/// Sum usage over JSONL contents, skipping lines that don't parse
fn sum_usage(contents: &str) -> TokenMetrics {
    let mut metrics = TokenMetrics::default();

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let entry: TranscriptEntry = match serde_json::from_str(line) {
            Ok(entry) => entry,
            Err(_) => continue, // partial tail write or junk line
        };

        if entry.entry_type.as_deref() != Some("assistant") {
            continue;
        }

        if let Some(usage) = entry.message.and_then(|m| m.usage) {
            metrics.input_tokens += usage.input_tokens;
            metrics.output_tokens += usage.output_tokens;
        }
    }

    metrics.total_tokens = metrics.input_tokens + metrics.output_tokens;
    metrics
}
