//! `bitmask-adapter` maps host-side conventions onto the `bitmask-array` core.
//!
//! This crate includes:
//! - Packing and unpacking between the bit-packed form and one byte per element (`bridge`)
//! - Slice arithmetic for `start:stop:step` indexers (`slice`)
//! - Resolution of scalar, position-list, mask and slice indexers into core
//!   operations, for both reads and assignments (`indexer`)
//! - Binary operations whose right-hand side is an unpacked byte buffer (`operand`)
//!
//! The core never depends on anything here.

pub mod bridge;
pub mod indexer;
pub mod operand;
pub mod slice;

pub use indexer::{Indexer, Selection, Value, get_item, set_item};
pub use operand::Operand;
pub use slice::{SliceIndices, SliceSpec};
