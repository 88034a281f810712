// Host payload model - the JSON Claude Code pipes to a statusLine command
//
// Only `transcript_path` drives the pet; everything else is carried so the
// payload parses cleanly and stays available for future status-line fields.
// Serde ignores unknown fields, so payload growth on the host side is safe.

use serde::Deserialize;

/// Input event from the host, read from stdin as a single JSON object
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusInput {
    /// Path to the session's transcript JSONL; the pet's food source
    #[serde(default)]
    pub transcript_path: Option<String>,

    /// Session identifier (unused, pass-through)
    #[serde(default)]
    pub session_id: Option<String>,

    /// Model info (unused, pass-through)
    #[serde(default)]
    pub model: Option<ModelInfo>,

    /// Workspace info (unused, pass-through)
    #[serde(default)]
    pub workspace: Option<WorkspaceInfo>,

    /// Session cost so far in USD (unused, pass-through)
    #[serde(default)]
    pub cost: Option<serde_json::Value>,
}

/// Model block of the host payload
#[derive(Debug, Clone, Deserialize)]
pub struct ModelInfo {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Workspace block of the host payload
#[derive(Debug, Clone, Deserialize)]
pub struct WorkspaceInfo {
    #[serde(default)]
    pub current_dir: Option<String>,
    #[serde(default)]
    pub project_dir: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_payload() {
        let payload = r#"{
            "session_id": "abc-123",
            "transcript_path": "/home/me/.claude/projects/foo/abc.jsonl",
            "model": {"id": "claude-sonnet-4-20250514", "display_name": "Sonnet"},
            "workspace": {"current_dir": "/work", "project_dir": "/work"},
            "cost": {"total_cost_usd": 0.42},
            "some_future_field": true
        }"#;
        let input: StatusInput = serde_json::from_str(payload).unwrap();
        assert_eq!(
            input.transcript_path.as_deref(),
            Some("/home/me/.claude/projects/foo/abc.jsonl")
        );
        assert_eq!(input.model.unwrap().display_name.as_deref(), Some("Sonnet"));
    }

    #[test]
    fn test_parse_minimal_payload() {
        let input: StatusInput = serde_json::from_str("{}").unwrap();
        assert!(input.transcript_path.is_none());
        assert!(input.model.is_none());
    }
}
