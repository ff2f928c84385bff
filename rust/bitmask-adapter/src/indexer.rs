//! Resolution of host-side indexers into core mask operations.
//!
//! A host probes an indexer once and wraps it in an [`Indexer`] variant; from
//! there [`get_item`] and [`set_item`] translate it into the fixed operations of
//! [`BitmaskArray`]. Assignments resolve and validate every target position
//! before the first bit is written, so a failed assignment leaves the array
//! exactly as it was.

use itertools::{Either, Itertools};

use bitmask_array::BitmaskArray;
use bitmask_common::{Result, error::Error, verify_len};

use crate::slice::{SliceIndices, SliceSpec};

/// An indexer, already classified by shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Indexer {
    /// A single position, negative counting from the end.
    Scalar(isize),
    /// An ordered list of positions, each normalized like a scalar.
    Positions(Vec<isize>),
    /// A boolean mask of the same length as the array, selecting where set.
    Mask(BitmaskArray),
    /// A `start:stop:step` slice.
    Slice(SliceSpec),
}

/// The result of reading through an [`Indexer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Scalar(bool),
    Array(BitmaskArray),
}

/// The right-hand side of an assignment through an [`Indexer`].
///
/// A scalar is broadcast to every selected position; an array must supply
/// exactly one value per selected position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Scalar(bool),
    Array(BitmaskArray),
}

impl Indexer {
    fn kind(&self) -> &'static str {
        match self {
            Indexer::Scalar(_) => "scalar",
            Indexer::Positions(_) => "positions",
            Indexer::Mask(_) => "mask",
            Indexer::Slice(_) => "slice",
        }
    }
}

impl Selection {
    pub fn as_scalar(&self) -> Option<bool> {
        match self {
            Selection::Scalar(value) => Some(*value),
            Selection::Array(_) => None,
        }
    }

    pub fn into_array(self) -> Option<BitmaskArray> {
        match self {
            Selection::Scalar(_) => None,
            Selection::Array(array) => Some(array),
        }
    }
}

impl From<isize> for Indexer {
    fn from(index: isize) -> Self {
        Indexer::Scalar(index)
    }
}

impl From<Vec<isize>> for Indexer {
    fn from(indices: Vec<isize>) -> Self {
        Indexer::Positions(indices)
    }
}

impl From<&[isize]> for Indexer {
    fn from(indices: &[isize]) -> Self {
        Indexer::Positions(indices.to_vec())
    }
}

impl From<BitmaskArray> for Indexer {
    fn from(mask: BitmaskArray) -> Self {
        Indexer::Mask(mask)
    }
}

impl From<SliceSpec> for Indexer {
    fn from(slice: SliceSpec) -> Self {
        Indexer::Slice(slice)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Scalar(value)
    }
}

impl From<BitmaskArray> for Value {
    fn from(array: BitmaskArray) -> Self {
        Value::Array(array)
    }
}

/// Validated target positions of a bulk indexer.
enum Targets {
    Positions(Vec<usize>),
    Slice(SliceIndices),
}

impl Targets {
    fn from_positions(array: &BitmaskArray, indices: &[isize]) -> Result<Targets> {
        indices
            .iter()
            .map(|&index| array.normalize_index(index))
            .try_collect()
            .map(Targets::Positions)
    }

    fn from_mask(array: &BitmaskArray, mask: &BitmaskArray) -> Result<Targets> {
        verify_len!(array.len(), mask.len());
        Ok(Targets::Positions(mask.iter().positions(|b| b).collect()))
    }

    fn from_slice(array: &BitmaskArray, slice: &SliceSpec) -> Result<Targets> {
        slice.indices(array.len()).map(Targets::Slice)
    }

    fn count(&self) -> usize {
        match self {
            Targets::Positions(positions) => positions.len(),
            Targets::Slice(indices) => indices.count,
        }
    }

    fn is_full(&self, len: usize) -> bool {
        match self {
            Targets::Positions(_) => false,
            Targets::Slice(indices) => indices.is_full(len),
        }
    }

    fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        match self {
            Targets::Positions(positions) => Either::Left(positions.iter().copied()),
            Targets::Slice(indices) => Either::Right(indices.positions()),
        }
    }
}

/// Reads the element or elements selected by `indexer`.
///
/// - `Scalar` yields [`Selection::Scalar`]; every other shape yields a new array
///   holding the selected elements in selection order.
/// - Out-of-range positions fail with `OutOfRange`, a mask of the wrong length
///   with `LengthMismatch`, a zero slice step with `InvalidArgument`.
pub fn get_item(array: &BitmaskArray, indexer: &Indexer) -> Result<Selection> {
    log::trace!(
        "get_item: {} indexer over {} elements",
        indexer.kind(),
        array.len()
    );
    let targets = match indexer {
        Indexer::Scalar(index) => return array.get(*index).map(Selection::Scalar),
        Indexer::Positions(indices) => return array.take(indices).map(Selection::Array),
        Indexer::Mask(mask) => Targets::from_mask(array, mask)?,
        Indexer::Slice(slice) => Targets::from_slice(array, slice)?,
    };
    if targets.is_full(array.len()) {
        return Ok(Selection::Array(array.copy()));
    }
    let selected = BitmaskArray::from_bools(targets.positions().map(|p| array.bit(p)));
    Ok(Selection::Array(selected))
}

/// Writes `value` to the element or elements selected by `indexer`.
///
/// All target positions are resolved and checked before any bit changes; on
/// error the array is left unchanged. A scalar indexer only accepts a scalar
/// value. An array value must have exactly one element per selected position.
///
/// Assigning a scalar through a slice covering the whole array in order fills
/// the buffer directly instead of writing position by position.
pub fn set_item(array: &mut BitmaskArray, indexer: &Indexer, value: Value) -> Result<()> {
    log::trace!(
        "set_item: {} indexer over {} elements",
        indexer.kind(),
        array.len()
    );
    let targets = match indexer {
        Indexer::Scalar(index) => return set_scalar(array, *index, value),
        Indexer::Positions(indices) => Targets::from_positions(array, indices),
        Indexer::Mask(mask) => Targets::from_mask(array, mask),
        Indexer::Slice(slice) => Targets::from_slice(array, slice),
    }
    .inspect_err(|e| {
        log::debug!("set_item: rejected {} indexer: {e}", indexer.kind());
    })?;

    match value {
        Value::Scalar(value) => {
            if targets.is_full(array.len()) {
                log::trace!("set_item: filling all {} elements", array.len());
                array.fill(value);
            } else {
                for position in targets.positions() {
                    array.set_bit(position, value);
                }
            }
        }
        Value::Array(values) => {
            verify_len!(targets.count(), values.len());
            if targets.is_full(array.len()) {
                array.assign(&values)?;
            } else {
                for (position, value) in targets.positions().zip(values.iter()) {
                    array.set_bit(position, value);
                }
            }
        }
    }
    Ok(())
}

fn set_scalar(array: &mut BitmaskArray, index: isize, value: Value) -> Result<()> {
    match value {
        Value::Scalar(value) => array.set(index, value),
        Value::Array(values) => {
            log::debug!(
                "set_item: rejected {} values for scalar index {index}",
                values.len()
            );
            Err(Error::invalid_arg(
                "value",
                "cannot assign a sequence to a single position",
            ))
        }
    }
}

/// Replaces the whole content of `dst` with a copy of `src`.
///
/// Fails with `LengthMismatch` if the lengths differ, leaving `dst` unchanged.
pub fn assign(dst: &mut BitmaskArray, src: &BitmaskArray) -> Result<()> {
    dst.assign(src).inspect_err(|e| log::debug!("assign: {e}"))
}
