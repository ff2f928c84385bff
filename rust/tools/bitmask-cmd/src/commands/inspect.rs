//! Inspect command implementation

use anyhow::Result;
use serde::Serialize;

use bitmask_array::BitmaskArray;

use crate::utils;

#[derive(Serialize)]
struct InspectSummary {
    len: usize,
    nbytes: usize,
    sum: usize,
    any: bool,
    all: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    argmin: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    argmax: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bits: Option<String>,
}

impl InspectSummary {
    fn new(mask: &BitmaskArray, verbose: u8) -> InspectSummary {
        InspectSummary {
            len: mask.len(),
            nbytes: mask.nbytes(),
            sum: mask.sum(),
            any: mask.any(),
            all: mask.all(),
            // Both fail only on an empty mask, which has nothing to report.
            argmin: mask.argmin().ok(),
            argmax: mask.argmax().ok(),
            bits: (verbose >= 1).then(|| utils::format_bits(mask)),
        }
    }
}

pub fn run(verbose: u8, mask_path: String) -> Result<()> {
    log::debug!("inspect: {}", mask_path);
    let mask = utils::read_mask(&mask_path)?;
    let summary = InspectSummary::new(&mask, verbose);
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
