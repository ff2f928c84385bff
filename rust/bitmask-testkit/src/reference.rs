//! Naive one-element-at-a-time reference models of the mask operations.

/// Resolves a possibly negative index the way the mask arrays do.
pub fn normalize(index: isize, len: usize) -> Option<usize> {
    let position = if index < 0 {
        index + len as isize
    } else {
        index
    };
    (position >= 0 && (position as usize) < len).then_some(position as usize)
}

pub fn invert(values: &[bool]) -> Vec<bool> {
    values.iter().map(|&v| !v).collect()
}

pub fn zip_with(lhs: &[bool], rhs: &[bool], op: impl Fn(bool, bool) -> bool) -> Vec<bool> {
    assert_eq!(lhs.len(), rhs.len());
    lhs.iter().zip(rhs).map(|(&l, &r)| op(l, r)).collect()
}

pub fn any(values: &[bool]) -> bool {
    values.iter().any(|&v| v)
}

pub fn all(values: &[bool]) -> bool {
    values.iter().all(|&v| v)
}

pub fn sum(values: &[bool]) -> usize {
    values.iter().filter(|&&v| v).count()
}

/// First position holding the smallest value, or `None` when empty.
pub fn argmin(values: &[bool]) -> Option<usize> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().position(|&v| !v).unwrap_or(0))
}

/// First position holding the largest value, or `None` when empty.
pub fn argmax(values: &[bool]) -> Option<usize> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().position(|&v| v).unwrap_or(0))
}

/// Gathers `values` at `indices`; `None` if any index is out of range.
pub fn take(values: &[bool], indices: &[isize]) -> Option<Vec<bool>> {
    indices
        .iter()
        .map(|&index| normalize(index, values.len()).map(|p| values[p]))
        .collect()
}

pub fn unpack(values: &[bool]) -> Vec<u8> {
    values.iter().map(|&v| v as u8).collect()
}
