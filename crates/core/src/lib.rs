//! Domain building blocks shared by the storage and HTTP crates.
//!
//! Nothing in here performs I/O.

pub mod error;
pub mod fields;
pub mod types;
