//! Conversion between packed masks and one-byte-per-element boolean buffers.
//!
//! The unpacked form is what array-processing hosts exchange: byte `i` is `1`
//! when element `i` is set and `0` otherwise. When packing, any non-zero byte
//! counts as `true`.

use bitmask_array::BitmaskArray;
use bitmask_common::{Result, verify_len};

/// Packs a one-byte-per-element buffer into a mask of the same length.
pub fn pack(unpacked: &[u8]) -> BitmaskArray {
    BitmaskArray::from_bools(unpacked.iter().map(|&byte| byte != 0))
}

/// Unpacks a mask into exactly `mask.len()` bytes of `0` or `1`.
pub fn unpack(mask: &BitmaskArray) -> Vec<u8> {
    mask.iter().map(u8::from).collect()
}

/// Unpacks a mask into a caller-provided buffer of exactly `mask.len()` bytes.
///
/// Fails with `LengthMismatch` if `dst` has a different length; `dst` is left
/// untouched in that case.
pub fn unpack_into(mask: &BitmaskArray, dst: &mut [u8]) -> Result<()> {
    verify_len!(mask.len(), dst.len());
    for (byte, value) in dst.iter_mut().zip(mask.iter()) {
        *byte = u8::from(value);
    }
    Ok(())
}

/// Packs a slice of booleans.
pub fn from_bools(values: &[bool]) -> BitmaskArray {
    BitmaskArray::from(values)
}

/// Unpacks a mask into a vector of booleans.
pub fn to_bools(mask: &BitmaskArray) -> Vec<bool> {
    mask.iter().collect()
}
