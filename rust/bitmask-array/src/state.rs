//! Serialized state of a [`BitmaskArray`].
//!
//! The state is a `(len, bytes)` pair holding the packed buffer with padding bits
//! cleared, so equal arrays always serialize identically. Deserialization checks
//! that the buffer size matches the length.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::BitmaskArray;

#[derive(Serialize, Deserialize)]
struct BitmaskState {
    len: usize,
    bytes: Vec<u8>,
}

impl Serialize for BitmaskArray {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        BitmaskState {
            len: self.len(),
            bytes: self.to_bytes(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BitmaskArray {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let state = BitmaskState::deserialize(deserializer)?;
        BitmaskArray::from_packed(state.bytes, state.len).map_err(D::Error::custom)
    }
}
