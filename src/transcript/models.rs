// Data models for parsing Claude Code transcript files
//
// A transcript is a JSON Lines file: one JSON object per line. Assistant
// entries embed an API message whose `usage` block carries the token counts
// we feed the pet with.
//
// Note: We only parse the fields we care about for token counting.
// Serde will ignore extra fields, making this robust to format changes.

use serde::Deserialize;

/// One line of a transcript file
#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptEntry {
    /// Entry kind: "assistant", "user", "summary", ...
    #[serde(default, rename = "type")]
    pub entry_type: Option<String>,

    /// The embedded API message; only assistant entries carry usage
    #[serde(default)]
    pub message: Option<TranscriptMessage>,
}

/// The API message embedded in a transcript entry
#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptMessage {
    #[serde(default)]
    pub usage: Option<Usage>,
}

/// Token usage statistics from one API call
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub input_tokens: u64,
    #[serde(default)]
    pub output_tokens: u64,
}

/// Token counts summed over a whole transcript
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenMetrics {
    /// Total input tokens across all assistant turns
    pub input_tokens: u64,
    /// Total output tokens across all assistant turns
    pub output_tokens: u64,
    /// input + output
    pub total_tokens: u64,
}
