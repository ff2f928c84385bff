use std::iter::FusedIterator;

/// An iterator over the elements of a [`BitmaskArray`](crate::BitmaskArray),
/// yielding one `bool` per position in index order.
///
/// The iterator borrows the packed buffer and never mutates it; a fresh
/// iterator always starts again from position 0.
#[derive(Clone)]
pub struct BitmaskIter<'a> {
    bytes: &'a [u8],
    front: usize,
    back: usize,
}

impl<'a> BitmaskIter<'a> {
    pub(crate) fn new(bytes: &'a [u8], len: usize) -> Self {
        debug_assert!(bytes.len() >= len.div_ceil(8));
        BitmaskIter {
            bytes,
            front: 0,
            back: len,
        }
    }

    /// Creates an empty `BitmaskIter` (the first `next()` call returns `None`).
    pub fn empty() -> Self {
        BitmaskIter {
            bytes: &[],
            front: 0,
            back: 0,
        }
    }

    #[inline]
    fn bit(&self, position: usize) -> bool {
        (self.bytes[position / 8] >> (position % 8)) & 1 != 0
    }
}

impl Iterator for BitmaskIter<'_> {
    type Item = bool;

    #[inline]
    fn next(&mut self) -> Option<bool> {
        if self.front >= self.back {
            return None;
        }
        let value = self.bit(self.front);
        self.front += 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<bool> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl DoubleEndedIterator for BitmaskIter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<bool> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.bit(self.back))
    }
}

impl ExactSizeIterator for BitmaskIter<'_> {}

impl FusedIterator for BitmaskIter<'_> {}
