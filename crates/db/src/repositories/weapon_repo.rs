//! Repository for the `weapons` table.

use armory_core::types::DbId;
use sqlx::PgPool;

use crate::models::weapon::{CreateWeapon, Weapon};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, power, rarity, value";

/// Provides CRUD operations for weapons.
pub struct WeaponRepo;

impl WeaponRepo {
    /// Insert a new weapon, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateWeapon) -> Result<Weapon, sqlx::Error> {
        let query = format!(
            "INSERT INTO weapons (power, rarity, value)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Weapon>(&query)
            .bind(input.power)
            .bind(&input.rarity)
            .bind(input.value)
            .fetch_one(pool)
            .await
    }

    /// Find a weapon by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Weapon>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM weapons WHERE id = $1");
        sqlx::query_as::<_, Weapon>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all weapons in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Weapon>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM weapons ORDER BY id ASC");
        sqlx::query_as::<_, Weapon>(&query).fetch_all(pool).await
    }

    /// Delete a weapon by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM weapons WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
