//! Row types and DTOs.

pub mod weapon;
