//! Combine command implementation

use anyhow::{Context, Result};

use bitmask_adapter::operand::{self, Operand};
use bitmask_array::BinaryOp;

use crate::utils;

pub fn run(op: BinaryOp, lhs_path: String, rhs_path: String, output_path: Option<String>) -> Result<()> {
    log::debug!("combine: {} {} {}", op, lhs_path, rhs_path);
    let lhs = utils::read_mask(&lhs_path)?;
    let rhs = utils::read_mask(&rhs_path)?;
    let result = operand::apply(&lhs, Operand::Mask(&rhs), op)
        .with_context(|| format!("Cannot {} {} with {}", op, lhs_path, rhs_path))?;
    utils::write_mask(&result, output_path)
}
