//! Pack command implementation

use anyhow::{Context, Result};
use std::fs;

use crate::utils;

pub fn run(input_path: String, output_path: Option<String>) -> Result<()> {
    log::debug!("pack: {}", input_path);
    utils::validate_file_exists(&input_path)
        .with_context(|| format!("Invalid input file: {}", input_path))?;
    let text = fs::read_to_string(&input_path)
        .with_context(|| format!("Failed to read input file: {}", input_path))?;
    let mask = utils::parse_bits(&text)
        .with_context(|| format!("Failed to parse bits from: {}", input_path))?;
    utils::write_mask(&mask, output_path)
}
