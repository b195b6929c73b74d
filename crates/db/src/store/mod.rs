//! Storage interface for weapons.
//!
//! Handlers depend on [`WeaponStore`] only. [`PgWeaponStore`] backs it with
//! PostgreSQL through [`WeaponRepo`](crate::repositories::WeaponRepo);
//! [`MemoryWeaponStore`] keeps everything in process.

mod memory;
mod postgres;

use armory_core::types::DbId;
use async_trait::async_trait;

use crate::models::weapon::{CreateWeapon, Weapon};

pub use memory::MemoryWeaponStore;
pub use postgres::PgWeaponStore;

#[async_trait]
pub trait WeaponStore: Send + Sync + 'static {
    /// Persist a new weapon. Storage assigns the id.
    async fn insert(&self, input: &CreateWeapon) -> Result<Weapon, sqlx::Error>;

    /// Returns `None` if no weapon has this id.
    async fn get_by_id(&self, id: DbId) -> Result<Option<Weapon>, sqlx::Error>;

    /// Every stored weapon, ordered by id.
    async fn list_all(&self) -> Result<Vec<Weapon>, sqlx::Error>;

    /// Returns `true` if the weapon existed and was removed.
    async fn delete_by_id(&self, id: DbId) -> Result<bool, sqlx::Error>;

    /// Check that the backing storage is reachable.
    async fn ping(&self) -> Result<(), sqlx::Error>;
}
