use anyhow::Result;

use crate::utils;

pub fn run(mask_path: String, output_path: Option<String>) -> Result<()> {
    log::debug!("invert: {}", mask_path);
    let mask = utils::read_mask(&mask_path)?;
    utils::write_mask(&!&mask, output_path)
}
