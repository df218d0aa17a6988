//! Codec configuration from a JSON file and command-line overrides.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use delim_codec::{Codec, CodecOptions};
use tracing::debug;

/// Loads codec options. A `--separator` flag wins over the file.
pub fn load_options(config: Option<&Path>, separator: Option<char>) -> Result<CodecOptions> {
    let mut options = match config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("read config {}", path.display()))?;
            serde_json::from_str::<CodecOptions>(&text)
                .with_context(|| format!("parse config {}", path.display()))?
        }
        None => CodecOptions::default(),
    };
    if let Some(separator) = separator {
        options.separator = separator;
    }
    debug!(separator = ?options.separator, "codec options");
    Ok(options)
}

pub fn build_codec(config: Option<&Path>, separator: Option<char>) -> Result<Codec> {
    let options = load_options(config, separator)?;
    Codec::new(&options).context("configure codec")
}
