//! `start:stop:step` slices over a sequence of known length.

use std::str::FromStr;

use bitmask_common::{Result, error::Error, verify_arg};

/// An unresolved slice: optional bounds and step, as written by the caller.
///
/// Bounds may be negative (counted from the end) or lie outside the sequence;
/// [`SliceSpec::indices`] clamps them against a concrete length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SliceSpec {
    pub start: Option<isize>,
    pub stop: Option<isize>,
    pub step: Option<isize>,
}

/// A slice resolved against a length: the first position, the exclusive stop,
/// the step and the number of positions selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceIndices {
    pub start: isize,
    pub stop: isize,
    pub step: isize,
    pub count: usize,
}

impl SliceSpec {
    pub fn new(start: Option<isize>, stop: Option<isize>, step: Option<isize>) -> SliceSpec {
        SliceSpec { start, stop, step }
    }

    /// The `:` slice, covering the whole sequence.
    pub fn full() -> SliceSpec {
        SliceSpec::default()
    }

    /// The `start:stop` slice with unit step.
    pub fn range(start: isize, stop: isize) -> SliceSpec {
        SliceSpec::new(Some(start), Some(stop), None)
    }

    /// Resolves the slice against a sequence of `len` elements.
    ///
    /// Follows the usual clamping rules: negative bounds are offset by `len`,
    /// and bounds still outside the sequence are clamped to its ends (to
    /// `-1`/`len - 1` for a negative step). A zero step is an error.
    pub fn indices(&self, len: usize) -> Result<SliceIndices> {
        let step = self.step.unwrap_or(1);
        verify_arg!(step, step != 0);
        let len = isize::try_from(len)
            .map_err(|_| Error::invalid_arg("len", format!("{len} exceeds isize::MAX")))?;

        let (lower, upper) = if step > 0 { (0, len) } else { (-1, len - 1) };
        let clamp = |bound: isize| {
            if bound < 0 {
                (bound + len).max(lower)
            } else {
                bound.min(upper)
            }
        };
        let start = self
            .start
            .map(clamp)
            .unwrap_or(if step > 0 { lower } else { upper });
        let stop = self
            .stop
            .map(clamp)
            .unwrap_or(if step > 0 { upper } else { lower });

        let count = if step > 0 && start < stop {
            ((stop - start - 1) / step + 1) as usize
        } else if step < 0 && stop < start {
            // `-step` overflows for `isize::MIN`.
            ((start - stop - 1) as usize) / step.unsigned_abs() + 1
        } else {
            0
        };

        Ok(SliceIndices {
            start,
            stop,
            step,
            count,
        })
    }
}

impl SliceIndices {
    /// Returns the selected positions in slice order.
    pub fn positions(&self) -> impl Iterator<Item = usize> + use<> {
        let SliceIndices {
            start, step, count, ..
        } = *self;
        (0..count).map(move |k| (start + k as isize * step) as usize)
    }

    /// Returns `true` if the slice selects every position of a `len`-element
    /// sequence in order.
    pub fn is_full(&self, len: usize) -> bool {
        self.step == 1 && self.start == 0 && self.count == len
    }
}

impl From<std::ops::RangeFull> for SliceSpec {
    fn from(_: std::ops::RangeFull) -> Self {
        SliceSpec::full()
    }
}

impl From<std::ops::Range<isize>> for SliceSpec {
    fn from(range: std::ops::Range<isize>) -> Self {
        SliceSpec::range(range.start, range.end)
    }
}

impl From<std::ops::RangeFrom<isize>> for SliceSpec {
    fn from(range: std::ops::RangeFrom<isize>) -> Self {
        SliceSpec::new(Some(range.start), None, None)
    }
}

impl From<std::ops::RangeTo<isize>> for SliceSpec {
    fn from(range: std::ops::RangeTo<isize>) -> Self {
        SliceSpec::new(None, Some(range.end), None)
    }
}

/// Parses `start:stop[:step]` with each part optional, e.g. `1:`, `::2`, `-3:-1`.
impl FromStr for SliceSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(':').map(str::trim).collect();
        if !(2..=3).contains(&parts.len()) {
            return Err(Error::invalid_arg(
                "slice",
                format!("expected start:stop[:step], got '{s}'"),
            ));
        }
        let parse = |part: &str| -> Result<Option<isize>> {
            if part.is_empty() {
                return Ok(None);
            }
            part.parse::<isize>()
                .map(Some)
                .map_err(|e| Error::invalid_arg("slice", format!("'{part}': {e}")))
        };
        Ok(SliceSpec {
            start: parse(parts[0])?,
            stop: parse(parts[1])?,
            step: parts.get(2).map(|p| parse(*p)).transpose()?.flatten(),
        })
    }
}
