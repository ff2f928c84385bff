//! Data generation utilities for testing.
//!
//! All generators are seeded so that a failing test reproduces exactly.

/// Lengths that straddle byte and word boundaries, plus a few larger ones.
///
/// Word-chunked kernels switch between their word loop, their byte tail and
/// the final partial byte at these points, so tests iterate over all of them.
pub const BOUNDARY_LENGTHS: &[usize] = &[
    0, 1, 2, 7, 8, 9, 15, 16, 17, 31, 32, 33, 63, 64, 65, 71, 72, 73, 127, 128, 129, 191, 200,
    255, 256, 257, 1000, 4099,
];

/// Generates `len` booleans where each value is `true` with probability `density`.
///
/// # Arguments
///
/// * `seed` - Seed of the random generator.
/// * `len` - Number of values to generate.
/// * `density` - Probability of `true`, clamped to `[0, 1]`.
pub fn random_bools(seed: u64, len: usize, density: f64) -> Vec<bool> {
    let density = density.clamp(0.0, 1.0);
    let mut rng = fastrand::Rng::with_seed(seed);
    (0..len).map(|_| rng.f64() < density).collect()
}

/// Generates `len` booleans, all `value` except for a single flipped position.
///
/// Useful for exercising short-circuiting scans: the deciding element can be
/// placed at the start, inside a whole word, in the byte tail or in the final
/// partial byte.
pub fn uniform_with_exception(len: usize, value: bool, exception: usize) -> Vec<bool> {
    assert!(exception < len, "exception {exception} out of bounds ({len})");
    let mut values = vec![value; len];
    values[exception] = !value;
    values
}

/// Generates `count` signed indices valid for a sequence of length `len`,
/// mixing positive and negative forms.
pub fn random_indices(seed: u64, len: usize, count: usize) -> Vec<isize> {
    assert_ne!(len, 0);
    let mut rng = fastrand::Rng::with_seed(seed);
    (0..count)
        .map(|_| {
            let position = rng.usize(..len);
            if rng.bool() {
                position as isize
            } else {
                position as isize - len as isize
            }
        })
        .collect()
}
