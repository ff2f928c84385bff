//! Bit-packed boolean mask arrays.
//!
//! This crate is the computational core: it has no knowledge of how masks are
//! indexed or exchanged by a hosting runtime (see `bitmask-adapter` for that).

pub mod chunked;
pub mod iter;
pub mod mask;
#[cfg(feature = "serde")]
mod state;
#[cfg(test)]
mod tests;

pub use iter::BitmaskIter;
pub use mask::{BinaryOp, BitmaskArray};
