//! Right-hand operands of binary mask operations.

use bitmask_array::{BinaryOp, BitmaskArray};
use bitmask_common::{Result, verify_len};

use crate::bridge;

/// The right-hand side of a binary operation: another mask, or a host boolean
/// buffer with one byte per element.
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a> {
    Mask(&'a BitmaskArray),
    Unpacked(&'a [u8]),
}

impl Operand<'_> {
    pub fn len(&self) -> usize {
        match self {
            Operand::Mask(mask) => mask.len(),
            Operand::Unpacked(bytes) => bytes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a> From<&'a BitmaskArray> for Operand<'a> {
    fn from(mask: &'a BitmaskArray) -> Self {
        Operand::Mask(mask)
    }
}

impl<'a> From<&'a [u8]> for Operand<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Operand::Unpacked(bytes)
    }
}

/// Applies `op` element-wise to `lhs` and `rhs`.
///
/// An unpacked operand is packed first. Fails with `LengthMismatch` when the
/// operand length differs from `lhs.len()`.
pub fn apply(lhs: &BitmaskArray, rhs: Operand<'_>, op: BinaryOp) -> Result<BitmaskArray> {
    match rhs {
        Operand::Mask(mask) => lhs.binary_op(mask, op),
        Operand::Unpacked(bytes) => {
            verify_len!(lhs.len(), bytes.len());
            lhs.binary_op(&bridge::pack(bytes), op)
        }
    }
}
