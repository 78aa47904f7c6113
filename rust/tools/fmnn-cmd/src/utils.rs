//! Common utilities for fmnn-cmd

use anyhow::{Context, Result};
use fmnn::Value;
use std::io::Read;
use std::path::Path;

/// Checks if a file exists and is readable
pub fn validate_file_exists(path: &str) -> Result<()> {
    let file_path = Path::new(path);
    if !file_path.exists() {
        anyhow::bail!("File does not exist: {}", path);
    }
    if !file_path.is_file() {
        anyhow::bail!("Path is not a file: {}", path);
    }
    Ok(())
}

/// Reads the input document from `path`, or from stdin when no path is given.
pub fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            validate_file_exists(path)?;
            std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))
        }
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

/// Parses a JSON array into a sequence of values.
pub fn parse_values(text: &str) -> Result<Vec<Value>> {
    let document: serde_json::Value =
        serde_json::from_str(text).context("Input is not valid JSON")?;
    fmnn_value::values_from_json_array(document)
        .ok_or_else(|| anyhow::anyhow!("Input must be a JSON array"))
}

/// Parses a single element given on the command line.
///
/// Anything that is not a JSON literal is taken as text.
pub fn parse_value(text: &str) -> Value {
    serde_json::from_str::<serde_json::Value>(text)
        .map(Value::from)
        .unwrap_or_else(|_| Value::Text(text.to_string()))
}
