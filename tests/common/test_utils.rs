use serde_json::{Value, json};
use std::path::{Path, PathBuf};

/// A record carrying both required keys.
pub fn valid_record(image_url: &str, model: &str) -> Value {
    json!({"image_url": image_url, "OCR_model": model})
}

/// A record missing the image reference.
pub fn record_missing_image(model: &str) -> Value {
    json!({"OCR_model": model})
}

pub fn invalid_entry_object() -> Value {
    json!({"error": "Invalid entry", "details": "Missing 'image_url' or 'OCR_model'"})
}

/// Writes a batch file into `dir` and returns its path.
pub fn write_batch_file(dir: &Path, name: &str, contents: &Value) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, serde_json::to_string_pretty(contents).unwrap()).unwrap();
    path
}
