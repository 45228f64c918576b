use crate::Result;
use serde_json::Value;
use std::path::Path;
use tracing::info;

/// Reads one file and parses it as a single JSON document.
///
/// No shape check happens here: the caller decides what to do with a
/// non-array document. A missing file or malformed JSON propagates as
/// an error.
pub fn read_json_file(path: &Path) -> Result<Value> {
    let contents = std::fs::read_to_string(path)?;
    let value = serde_json::from_str(&contents)?;
    Ok(value)
}

/// Serializes a value as human-readable JSON and writes it to `path`,
/// creating or overwriting the file. Non-ASCII characters are kept
/// as-is rather than escaped. Not atomic.
pub fn write_json_file(value: &Value, path: &Path) -> Result<()> {
    let contents = serde_json::to_string_pretty(value)?;
    std::fs::write(path, contents)?;

    info!("Data successfully written to {}", path.display());
    Ok(())
}
