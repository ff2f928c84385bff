//! Common utilities for bitmask-cmd

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use bitmask_array::BitmaskArray;

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

/// Parses `0`/`1` characters into a mask, skipping whitespace.
pub fn parse_bits(text: &str) -> Result<BitmaskArray> {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .enumerate()
        .map(|(i, c)| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            other => Err(anyhow::anyhow!("Unexpected character '{}' at element {}", other, i)),
        })
        .collect()
}

/// Renders a mask as a string of `0`/`1` characters.
pub fn format_bits(mask: &BitmaskArray) -> String {
    mask.iter().map(|b| if b { '1' } else { '0' }).collect()
}

/// Reads a mask state file written by `pack`, `invert` or `combine`.
pub fn read_mask(path: &str) -> Result<BitmaskArray> {
    validate_file_exists(path)?;
    let json =
        fs::read_to_string(path).with_context(|| format!("Failed to read mask file: {}", path))?;
    serde_json::from_str(&json).with_context(|| format!("Invalid mask state in: {}", path))
}

/// Writes a mask state to `output_path`, or to stdout if none is given.
pub fn write_mask(mask: &BitmaskArray, output_path: Option<String>) -> Result<()> {
    let json = serde_json::to_string(mask).context("Failed to serialize mask state")?;
    match output_path {
        Some(output_file) => {
            fs::write(&output_file, &json)
                .with_context(|| format!("Failed to write mask to file: {}", output_file))?;
            println!("Mask written to: {}", output_file);
        }
        None => {
            println!("{}", json);
        }
    }
    Ok(())
}
