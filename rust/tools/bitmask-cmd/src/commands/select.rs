//! Select command implementation

use anyhow::{Context, Result};

use bitmask_adapter::{Indexer, Selection, SliceSpec, get_item};

use crate::utils;

pub fn run(mask_path: String, indices: Vec<isize>, slice: Option<String>) -> Result<()> {
    log::debug!("select: {}", mask_path);
    let mask = utils::read_mask(&mask_path)?;

    let indexer = match slice {
        Some(slice) => Indexer::Slice(
            slice
                .parse::<SliceSpec>()
                .with_context(|| format!("Invalid slice: {}", slice))?,
        ),
        None if indices.len() == 1 => Indexer::Scalar(indices[0]),
        None => Indexer::Positions(indices),
    };

    let selection = get_item(&mask, &indexer)
        .with_context(|| format!("Failed to select from: {}", mask_path))?;
    match selection {
        Selection::Scalar(value) => println!("{}", u8::from(value)),
        Selection::Array(selected) => println!("{}", utils::format_bits(&selected)),
    }
    Ok(())
}
