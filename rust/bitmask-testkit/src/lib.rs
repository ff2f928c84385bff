//! Test utilities and helpers for the bitmask crates.
//!
//! This crate provides:
//! - Data generation for seeded random boolean sequences
//! - Naive per-element reference implementations of the mask operations, used
//!   as the baseline that the word-chunked kernels are checked against
//!
//! It deliberately works on plain `bool` slices and does not depend on the
//! crates it helps to test.

pub mod data_gen;
pub mod reference;
