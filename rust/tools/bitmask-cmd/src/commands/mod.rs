//! Command implementations for bitmask-cmd

pub mod combine;
pub mod inspect;
pub mod invert;
pub mod pack;
pub mod select;
