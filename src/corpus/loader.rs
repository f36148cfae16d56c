// Record loading — JSON array files and JSON Lines exports.
//
// Database dumps usually come out as one JSON object per line; hand-made
// fixtures tend to be a single array. The format is sniffed from the first
// non-whitespace byte.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use super::record::JokeRecord;

/// Read all records from `path`.
pub fn load_records(path: &Path) -> Result<Vec<JokeRecord>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read joke records from {}", path.display()))?;

    let records = parse_records(&text)
        .with_context(|| format!("Failed to parse joke records in {}", path.display()))?;

    debug!(path = %path.display(), records = records.len(), "Loaded joke records");
    Ok(records)
}

/// Parse records from either a JSON array or JSON Lines text.
pub fn parse_records(text: &str) -> Result<Vec<JokeRecord>> {
    if text.trim_start().starts_with('[') {
        return serde_json::from_str(text).context("Invalid JSON array of records");
    }

    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str(line).with_context(|| format!("Invalid record on line {}", i + 1))
        })
        .collect()
}
