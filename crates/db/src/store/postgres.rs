use armory_core::types::DbId;
use async_trait::async_trait;

use super::WeaponStore;
use crate::models::weapon::{CreateWeapon, Weapon};
use crate::repositories::WeaponRepo;
use crate::DbPool;

/// [`WeaponStore`] backed by the `weapons` table.
#[derive(Clone)]
pub struct PgWeaponStore {
    pool: DbPool,
}

impl PgWeaponStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl WeaponStore for PgWeaponStore {
    async fn insert(&self, input: &CreateWeapon) -> Result<Weapon, sqlx::Error> {
        WeaponRepo::create(&self.pool, input).await
    }

    async fn get_by_id(&self, id: DbId) -> Result<Option<Weapon>, sqlx::Error> {
        WeaponRepo::find_by_id(&self.pool, id).await
    }

    async fn list_all(&self) -> Result<Vec<Weapon>, sqlx::Error> {
        WeaponRepo::list(&self.pool).await
    }

    async fn delete_by_id(&self, id: DbId) -> Result<bool, sqlx::Error> {
        WeaponRepo::delete(&self.pool, id).await
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }
}
