mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use std::path::Path;
use tracing::debug;

/// Builds the runtime configuration once at the process boundary.
///
/// A YAML file at `CONFIG_PATH` (default `config.yaml`) is read when it
/// exists; `OCR_API_URL`, `OCR_INPUT_DIR` and `OCR_OUTPUT_DIR` override
/// its values. Core logic never reads the environment itself.
pub fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    let mut config = if Path::new(&config_path).exists() {
        debug!("Loading configuration from: {}", config_path);
        let config_str = std::fs::read_to_string(&config_path)?;
        serde_yaml::from_str::<Config>(&config_str)?
    } else {
        Config {
            api: ApiConfig {
                endpoint: String::new(),
            },
            input_dir: types::default_input_dir(),
            output_dir: types::default_output_dir(),
            logs: LogsConfig::default(),
        }
    };

    if let Ok(endpoint) = env::var("OCR_API_URL") {
        config.api.endpoint = endpoint;
    }
    if let Ok(input_dir) = env::var("OCR_INPUT_DIR") {
        config.input_dir = input_dir;
    }
    if let Ok(output_dir) = env::var("OCR_OUTPUT_DIR") {
        config.output_dir = output_dir;
    }

    if config.api.endpoint.is_empty() {
        return Err(Error::config(
            "API endpoint not set: provide OCR_API_URL or an api.endpoint entry in the config file",
        ));
    }

    Ok(config)
}
