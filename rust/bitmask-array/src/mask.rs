//! A fixed-length boolean mask stored one bit per element.

use std::fmt;
use std::ops::Not;
use std::str::FromStr;

use bitmask_common::{Result, error::Error, verify_len};

use crate::chunked;
use crate::iter::BitmaskIter;

/// A fixed-length sequence of booleans packed into an owned byte buffer.
///
/// # Storage Format
///
/// The bits are stored LSB-first in `len.div_ceil(8)` bytes:
/// - Bit 0 is the least significant bit of the first byte
/// - Bit 7 is the most significant bit of the first byte
/// - Bit 8 is the least significant bit of the second byte, and so on
///
/// Bits beyond `len` in the final byte are padding. Their value is unspecified
/// (operations such as [`BitmaskArray::invert`] are free to flip them) and no
/// query ever observes them: every read is bounded by `len`, and equality only
/// compares logical bits.
///
/// # Indexing
///
/// The fallible accessors ([`get`](Self::get), [`set`](Self::set),
/// [`take`](Self::take)) accept signed indices. A negative index counts from the
/// end (`-1` is the last element) and is normalized exactly once; anything still
/// outside `[0, len)` afterwards is an [`OutOfRange`] error.
///
/// # Performance
///
/// - Individual bit access: O(1)
/// - Invert and binary operations: O(n/64), one 64-bit word at a time
/// - `any`/`all`/`argmin`/`argmax`: O(n/64) worst case, stopping at the first
///   deciding word
///
/// [`OutOfRange`]: bitmask_common::error::ErrorKind::OutOfRange
#[derive(Clone, Default)]
pub struct BitmaskArray {
    len: usize,
    bytes: Box<[u8]>,
}

/// A bitwise operator applied element-wise by [`BitmaskArray::binary_op`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    And,
    Or,
    Xor,
}

impl BinaryOp {
    /// Applies the operator to a pair of booleans.
    #[inline]
    pub fn eval(self, lhs: bool, rhs: bool) -> bool {
        match self {
            BinaryOp::And => lhs & rhs,
            BinaryOp::Or => lhs | rhs,
            BinaryOp::Xor => lhs ^ rhs,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BinaryOp::And => "and",
            BinaryOp::Or => "or",
            BinaryOp::Xor => "xor",
        }
    }
}

impl FromStr for BinaryOp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "and" | "&" => Ok(BinaryOp::And),
            "or" | "|" => Ok(BinaryOp::Or),
            "xor" | "^" => Ok(BinaryOp::Xor),
            _ => Err(Error::invalid_arg(
                "op",
                format!("unknown binary operator '{s}'"),
            )),
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl BitmaskArray {
    /// Creates an empty array (`len == 0`, no storage).
    pub fn new() -> BitmaskArray {
        BitmaskArray::default()
    }

    /// Creates an array of `len` cleared bits.
    pub fn zeroed(len: usize) -> BitmaskArray {
        BitmaskArray {
            len,
            bytes: vec![0u8; len.div_ceil(8)].into_boxed_slice(),
        }
    }

    /// Creates an array of `len` set bits.
    pub fn full(len: usize) -> BitmaskArray {
        BitmaskArray {
            len,
            bytes: vec![u8::MAX; len.div_ceil(8)].into_boxed_slice(),
        }
    }

    /// Packs a sequence of booleans, one bit per value, in iteration order.
    pub fn from_bools(values: impl IntoIterator<Item = bool>) -> BitmaskArray {
        let values = values.into_iter();
        let mut bytes = Vec::with_capacity(values.size_hint().0.div_ceil(8));
        let mut len = 0usize;
        let mut current = 0u8;
        for value in values {
            current |= (value as u8) << (len % 8);
            len += 1;
            if len % 8 == 0 {
                bytes.push(current);
                current = 0;
            }
        }
        if len % 8 != 0 {
            bytes.push(current);
        }
        BitmaskArray {
            len,
            bytes: bytes.into_boxed_slice(),
        }
    }

    /// Wraps an already packed LSB-first buffer.
    ///
    /// The buffer must hold exactly `len.div_ceil(8)` bytes. Padding bits in the
    /// final byte are kept as given; they are never observed.
    pub fn from_packed(bytes: impl Into<Box<[u8]>>, len: usize) -> Result<BitmaskArray> {
        let bytes = bytes.into();
        let expected = len.div_ceil(8);
        if bytes.len() != expected {
            return Err(Error::invalid_arg(
                "bytes",
                format!(
                    "{len} bits require {expected} packed bytes, got {}",
                    bytes.len()
                ),
            ));
        }
        Ok(BitmaskArray { len, bytes })
    }

    /// Returns the number of elements (bits).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the array has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Alias for [`len`](Self::len), matching the array-like `size` attribute.
    #[inline]
    pub fn size(&self) -> usize {
        self.len
    }

    /// Returns the size of the packed buffer in bytes.
    #[inline]
    pub fn nbytes(&self) -> usize {
        self.bytes.len()
    }

    /// Returns a read-only view of the packed buffer.
    ///
    /// Padding bits in the last byte are included as stored.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns a copy of the packed buffer with the padding bits cleared.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = self.bytes.to_vec();
        let partial = self.len % 8;
        if partial != 0 {
            if let Some(last) = bytes.last_mut() {
                *last &= (1u8 << partial) - 1;
            }
        }
        bytes
    }

    /// Resolves a possibly negative `index` to a position in `[0, len)`.
    pub fn normalize_index(&self, index: isize) -> Result<usize> {
        let position = if index < 0 {
            self.len.checked_sub(index.unsigned_abs())
        } else {
            Some(index as usize).filter(|&i| i < self.len)
        };
        position.ok_or_else(|| Error::out_of_range(index, self.len))
    }

    /// Returns the element at `index`, counting from the end when negative.
    pub fn get(&self, index: isize) -> Result<bool> {
        let position = self.normalize_index(index)?;
        Ok(self.bit(position))
    }

    /// Sets the element at `index`, counting from the end when negative.
    ///
    /// The bit is written in place; on error the array is unchanged.
    pub fn set(&mut self, index: isize, value: bool) -> Result<()> {
        let position = self.normalize_index(index)?;
        self.set_bit(position, value);
        Ok(())
    }

    /// Returns the bit at an already validated position.
    ///
    /// # Panics
    ///
    /// Panics if `position >= len`, including positions that fall on padding
    /// bits of the last byte.
    #[inline]
    pub fn bit(&self, position: usize) -> bool {
        assert!(
            position < self.len,
            "Index {position} out of bounds (len: {})",
            self.len
        );
        (self.bytes[position / 8] >> (position % 8)) & 1 != 0
    }

    /// Writes the bit at an already validated position.
    ///
    /// # Panics
    ///
    /// Panics if `position >= len`; padding bits are never written.
    #[inline]
    pub fn set_bit(&mut self, position: usize, value: bool) {
        assert!(
            position < self.len,
            "Index {position} out of bounds (len: {})",
            self.len
        );
        let mask = 1u8 << (position % 8);
        let byte = &mut self.bytes[position / 8];
        *byte = (*byte & !mask) | (mask & (value as u8).wrapping_neg());
    }

    /// Sets every element to `value`.
    pub fn fill(&mut self, value: bool) {
        self.bytes.fill(if value { u8::MAX } else { 0 });
    }

    /// Returns a new array with every element complemented.
    pub fn invert(&self) -> BitmaskArray {
        let mut bytes = vec![0u8; self.bytes.len()].into_boxed_slice();
        chunked::transform_unary(&self.bytes, &mut bytes, |word| !word);
        BitmaskArray {
            len: self.len,
            bytes,
        }
    }

    /// Combines two arrays of equal length element-wise.
    ///
    /// Fails with `LengthMismatch` when the lengths differ.
    pub fn binary_op(&self, other: &BitmaskArray, op: BinaryOp) -> Result<BitmaskArray> {
        verify_len!(self.len, other.len);
        let mut bytes = vec![0u8; self.bytes.len()].into_boxed_slice();
        let (lhs, rhs) = (&self.bytes[..], &other.bytes[..]);
        match op {
            BinaryOp::And => chunked::transform_binary(lhs, rhs, &mut bytes, |a, b| a & b),
            BinaryOp::Or => chunked::transform_binary(lhs, rhs, &mut bytes, |a, b| a | b),
            BinaryOp::Xor => chunked::transform_binary(lhs, rhs, &mut bytes, |a, b| a ^ b),
        }
        Ok(BitmaskArray {
            len: self.len,
            bytes,
        })
    }

    pub fn and(&self, other: &BitmaskArray) -> Result<BitmaskArray> {
        self.binary_op(other, BinaryOp::And)
    }

    pub fn or(&self, other: &BitmaskArray) -> Result<BitmaskArray> {
        self.binary_op(other, BinaryOp::Or)
    }

    pub fn xor(&self, other: &BitmaskArray) -> Result<BitmaskArray> {
        self.binary_op(other, BinaryOp::Xor)
    }

    /// Returns `true` if any element is set. `false` for an empty array.
    pub fn any(&self) -> bool {
        self.first_set().is_some()
    }

    /// Returns `true` if every element is set. `true` for an empty array.
    pub fn all(&self) -> bool {
        self.first_clear().is_none()
    }

    /// Counts the set elements.
    pub fn sum(&self) -> usize {
        chunked::count_ones(&self.bytes, self.len)
    }

    /// Counts the cleared elements.
    pub fn count_zeros(&self) -> usize {
        self.len - self.sum()
    }

    /// Returns the position of the first set element, if any.
    pub fn first_set(&self) -> Option<usize> {
        chunked::find_first(&self.bytes, self.len, |word| word)
    }

    /// Returns the position of the first cleared element, if any.
    pub fn first_clear(&self) -> Option<usize> {
        chunked::find_first(&self.bytes, self.len, |word| !word)
    }

    /// Returns the position of the first minimum, treating bits as 0/1.
    ///
    /// That is the first cleared element, or `0` when every element is set.
    /// Fails with `EmptyCollection` on an empty array.
    pub fn argmin(&self) -> Result<usize> {
        if self.is_empty() {
            return Err(Error::empty_collection("argmin"));
        }
        Ok(self.first_clear().unwrap_or(0))
    }

    /// Returns the position of the first maximum, treating bits as 0/1.
    ///
    /// That is the first set element, or `0` when every element is cleared.
    /// Fails with `EmptyCollection` on an empty array.
    pub fn argmax(&self) -> Result<usize> {
        if self.is_empty() {
            return Err(Error::empty_collection("argmax"));
        }
        Ok(self.first_set().unwrap_or(0))
    }

    /// Returns an independent deep copy.
    pub fn copy(&self) -> BitmaskArray {
        self.clone()
    }

    /// Gathers the elements at `indices`, in order, into a new array.
    ///
    /// Each index is normalized like [`get`](Self::get). The first out-of-range
    /// index fails the whole call and no result is produced.
    pub fn take(&self, indices: &[isize]) -> Result<BitmaskArray> {
        let mut result = BitmaskArray::zeroed(indices.len());
        for (target, &index) in indices.iter().enumerate() {
            let position = self.normalize_index(index)?;
            result.set_bit(target, self.bit(position));
        }
        Ok(result)
    }

    /// Replaces the contents with a copy of `other`, which must be the same length.
    pub fn assign(&mut self, other: &BitmaskArray) -> Result<()> {
        verify_len!(self.len, other.len);
        self.bytes.copy_from_slice(&other.bytes);
        Ok(())
    }

    /// Returns an iterator over the elements in index order.
    pub fn iter(&self) -> BitmaskIter<'_> {
        BitmaskIter::new(&self.bytes, self.len)
    }
}

impl PartialEq for BitmaskArray {
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }
        let full_bytes = self.len / 8;
        if self.bytes[..full_bytes] != other.bytes[..full_bytes] {
            return false;
        }
        let partial = self.len % 8;
        if partial == 0 {
            return true;
        }
        let mask = (1u8 << partial) - 1;
        (self.bytes[full_bytes] & mask) == (other.bytes[full_bytes] & mask)
    }
}

impl Eq for BitmaskArray {}

impl fmt::Debug for BitmaskArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bits: String = self.iter().map(|b| if b { '1' } else { '0' }).collect();
        f.debug_struct("BitmaskArray")
            .field("len", &self.len)
            .field("bits", &bits)
            .finish()
    }
}

impl Not for &BitmaskArray {
    type Output = BitmaskArray;

    fn not(self) -> BitmaskArray {
        self.invert()
    }
}

impl Not for BitmaskArray {
    type Output = BitmaskArray;

    fn not(self) -> BitmaskArray {
        self.invert()
    }
}

impl FromIterator<bool> for BitmaskArray {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        BitmaskArray::from_bools(iter)
    }
}

impl From<&[bool]> for BitmaskArray {
    fn from(values: &[bool]) -> Self {
        BitmaskArray::from_bools(values.iter().copied())
    }
}

impl From<Vec<bool>> for BitmaskArray {
    fn from(values: Vec<bool>) -> Self {
        BitmaskArray::from_bools(values)
    }
}

impl<'a> IntoIterator for &'a BitmaskArray {
    type Item = bool;
    type IntoIter = BitmaskIter<'a>;

    fn into_iter(self) -> BitmaskIter<'a> {
        self.iter()
    }
}
