//! Word-chunked kernels over packed bit buffers.
//!
//! Bits are stored LSB-first: bit `i` lives in byte `i / 8` at position `i % 8`.
//! Reading eight consecutive bytes as a little-endian `u64` therefore yields a
//! word whose bit `k` is logical bit `8 * byte_offset + k`, which lets every
//! kernel here work on whole words and fall back to single bytes only for the
//! tail that does not fill a word.
//!
//! The transforms operate on the full byte buffer (padding bits included) since
//! the result inherits the logical length of its inputs. The scans and counts
//! are bounded by a logical bit length and never look at padding bits.

/// Number of bytes in a processing word.
pub const WORD_BYTES: usize = std::mem::size_of::<u64>();

/// Number of bits in a processing word.
pub const WORD_BITS: usize = u64::BITS as usize;

/// Returns the length of the prefix of a `byte_len` buffer that is covered by
/// whole words.
///
/// Computed by rounding down, so it cannot overflow for any `byte_len` (an
/// upper bound of the form `i + WORD_BYTES - 1 < byte_len` would).
#[inline]
pub fn word_aligned_len(byte_len: usize) -> usize {
    byte_len - byte_len % WORD_BYTES
}

#[inline]
fn read_word(chunk: &[u8]) -> u64 {
    u64::from_le(bytemuck::pod_read_unaligned(chunk))
}

#[inline]
fn write_word(chunk: &mut [u8], word: u64) {
    chunk.copy_from_slice(&word.to_le_bytes());
}

/// Writes `op(src)` into `dst`, a word at a time over the aligned prefix and a
/// byte at a time over the tail.
///
/// `op` must be a lane-independent bitwise operator (e.g. `!w`): the tail
/// applies it to a byte widened to `u64` and keeps the low eight bits.
///
/// # Panics
///
/// Panics if `src` and `dst` differ in length.
pub fn transform_unary(src: &[u8], dst: &mut [u8], op: impl Fn(u64) -> u64) {
    assert_eq!(
        src.len(),
        dst.len(),
        "source and destination buffers must have the same length"
    );
    let aligned = word_aligned_len(src.len());
    let (src_words, src_tail) = src.split_at(aligned);
    let (dst_words, dst_tail) = dst.split_at_mut(aligned);

    for (s, d) in src_words
        .chunks_exact(WORD_BYTES)
        .zip(dst_words.chunks_exact_mut(WORD_BYTES))
    {
        write_word(d, op(read_word(s)));
    }

    for (s, d) in src_tail.iter().zip(dst_tail.iter_mut()) {
        *d = op(u64::from(*s)) as u8;
    }
}

/// Writes `op(lhs, rhs)` into `dst`, mirroring [`transform_unary`].
///
/// # Panics
///
/// Panics if the three buffers differ in length.
pub fn transform_binary(lhs: &[u8], rhs: &[u8], dst: &mut [u8], op: impl Fn(u64, u64) -> u64) {
    assert_eq!(lhs.len(), rhs.len(), "operand buffers must have the same length");
    assert_eq!(
        lhs.len(),
        dst.len(),
        "operand and destination buffers must have the same length"
    );
    let aligned = word_aligned_len(lhs.len());
    let (lhs_words, lhs_tail) = lhs.split_at(aligned);
    let (rhs_words, rhs_tail) = rhs.split_at(aligned);
    let (dst_words, dst_tail) = dst.split_at_mut(aligned);

    for ((l, r), d) in lhs_words
        .chunks_exact(WORD_BYTES)
        .zip(rhs_words.chunks_exact(WORD_BYTES))
        .zip(dst_words.chunks_exact_mut(WORD_BYTES))
    {
        write_word(d, op(read_word(l), read_word(r)));
    }

    for ((l, r), d) in lhs_tail.iter().zip(rhs_tail).zip(dst_tail.iter_mut()) {
        *d = op(u64::from(*l), u64::from(*r)) as u8;
    }
}

/// Returns the index of the first bit below `len` that is reported by `hits`.
///
/// `hits` maps a word to the set of "interesting" bit positions in it (for
/// instance `|w| w` finds set bits and `|w| !w` finds cleared bits). A word
/// for which `hits` is zero is skipped whole; the scan stops at the first
/// non-zero result.
///
/// Only bytes lying entirely below `len` take the word and byte paths. The
/// final partial byte, if any, is masked down to its `len % 8` logical bits.
///
/// # Panics
///
/// Panics if `bytes` holds fewer than `len.div_ceil(8)` bytes.
pub fn find_first(bytes: &[u8], len: usize, hits: impl Fn(u64) -> u64) -> Option<usize> {
    let full_bytes = len / 8;
    let aligned = word_aligned_len(full_bytes);

    for (word_index, chunk) in bytes[..aligned].chunks_exact(WORD_BYTES).enumerate() {
        let found = hits(read_word(chunk));
        if found != 0 {
            return Some(word_index * WORD_BITS + found.trailing_zeros() as usize);
        }
    }

    for (byte_index, &byte) in bytes.iter().enumerate().take(full_bytes).skip(aligned) {
        let found = hits(u64::from(byte)) & 0xff;
        if found != 0 {
            return Some(byte_index * 8 + found.trailing_zeros() as usize);
        }
    }

    let partial = len % 8;
    if partial != 0 {
        let mask = (1u64 << partial) - 1;
        let found = hits(u64::from(bytes[full_bytes])) & mask;
        if found != 0 {
            return Some(full_bytes * 8 + found.trailing_zeros() as usize);
        }
    }

    None
}

/// Counts the set bits among the first `len` bits of `bytes`.
///
/// # Panics
///
/// Panics if `bytes` holds fewer than `len.div_ceil(8)` bytes.
pub fn count_ones(bytes: &[u8], len: usize) -> usize {
    let full_bytes = len / 8;
    let aligned = word_aligned_len(full_bytes);

    let mut count: usize = bytes[..aligned]
        .chunks_exact(WORD_BYTES)
        .map(|chunk| read_word(chunk).count_ones() as usize)
        .sum();
    count += bytes[aligned..full_bytes]
        .iter()
        .map(|byte| byte.count_ones() as usize)
        .sum::<usize>();

    let partial = len % 8;
    if partial != 0 {
        let mask = (1u8 << partial) - 1;
        count += (bytes[full_bytes] & mask).count_ones() as usize;
    }
    count
}
