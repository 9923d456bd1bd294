//! Command implementations for the `gx` binary.

pub mod browse;
pub mod order;
pub mod profile;
