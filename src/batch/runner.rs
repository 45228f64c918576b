use super::dispatch::process_entries;
use super::io::{read_json_file, write_json_file};
use crate::{Error, Result, api::OcrApi};
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info};

/// Runs the full pipeline over one directory.
///
/// Every regular `*.json` file directly inside `input_dir` is read,
/// dispatched record by record, and its results written under the same
/// file name inside `output_dir` (created if absent). Files are handled
/// strictly one at a time, in filesystem enumeration order. A file that
/// parses to JSON `null` is skipped without output; any other non-array
/// document aborts the run. Returns the number of output files written.
pub async fn process_directory(
    api: &dyn OcrApi,
    input_dir: &Path,
    output_dir: &Path,
) -> Result<usize> {
    std::fs::create_dir_all(output_dir)?;

    let mut written = 0;
    for entry in std::fs::read_dir(input_dir)? {
        let entry = entry?;
        let input_file = entry.path();
        if !is_batch_file(&input_file) {
            continue;
        }

        debug!("Processing batch file {}", input_file.display());
        let document = read_json_file(&input_file)?;
        let entries = match document {
            Value::Null => {
                debug!("Skipping {}: empty document", input_file.display());
                continue;
            }
            Value::Array(entries) => entries,
            other => {
                return Err(Error::invalid_batch(
                    input_file.display().to_string(),
                    format!("expected a JSON array of records, got {}", json_kind(&other)),
                ));
            }
        };

        let responses = process_entries(api, &entries).await;

        let file_name = input_file.file_name().unwrap_or_default();
        let output_file = output_dir.join(file_name);
        write_json_file(&Value::Array(responses), &output_file)?;
        written += 1;
    }

    info!("Processed {} batch file(s) from {}", written, input_dir.display());
    Ok(written)
}

fn is_batch_file(path: &Path) -> bool {
    path.is_file() && path.extension().is_some_and(|ext| ext == "json")
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
