//! Request handlers.
//!
//! Each submodule provides async handler functions for a single entity
//! type. Handlers delegate to the [`WeaponStore`](armory_db::store::WeaponStore)
//! held in [`AppState`](crate::state::AppState) and map errors via
//! [`AppError`](crate::error::AppError).

pub mod weapon;
