//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod weapon_repo;

pub use weapon_repo::WeaponRepo;
