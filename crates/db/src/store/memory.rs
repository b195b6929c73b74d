use std::collections::BTreeMap;

use armory_core::types::DbId;
use async_trait::async_trait;
use tokio::sync::RwLock;

use super::WeaponStore;
use crate::models::weapon::{CreateWeapon, Weapon};

/// In-process [`WeaponStore`].
///
/// Ids start at 1 and are never reused, matching `BIGSERIAL` behaviour.
#[derive(Default)]
pub struct MemoryWeaponStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    last_id: DbId,
    rows: BTreeMap<DbId, Weapon>,
}

impl MemoryWeaponStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WeaponStore for MemoryWeaponStore {
    async fn insert(&self, input: &CreateWeapon) -> Result<Weapon, sqlx::Error> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let weapon = input.clone().into_weapon(inner.last_id);
        inner.rows.insert(weapon.id, weapon.clone());
        Ok(weapon)
    }

    async fn get_by_id(&self, id: DbId) -> Result<Option<Weapon>, sqlx::Error> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Weapon>, sqlx::Error> {
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn delete_by_id(&self, id: DbId) -> Result<bool, sqlx::Error> {
        Ok(self.inner.write().await.rows.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn sword(power: i64) -> CreateWeapon {
        CreateWeapon {
            power,
            rarity: "rare".to_string(),
            value: 99.5,
        }
    }

    #[tokio::test]
    async fn ids_are_sequential_and_never_reused() {
        let store = MemoryWeaponStore::new();
        let a = store.insert(&sword(1)).await.unwrap();
        let b = store.insert(&sword(2)).await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));

        assert!(store.delete_by_id(b.id).await.unwrap());
        let c = store.insert(&sword(3)).await.unwrap();
        assert_eq!(c.id, 3);
    }

    #[tokio::test]
    async fn delete_then_get_returns_none() {
        let store = MemoryWeaponStore::new();
        let w = store.insert(&sword(10)).await.unwrap();
        assert_eq!(store.get_by_id(w.id).await.unwrap(), Some(w.clone()));

        assert!(store.delete_by_id(w.id).await.unwrap());
        assert_matches!(store.get_by_id(w.id).await, Ok(None));
        assert!(!store.delete_by_id(w.id).await.unwrap());
    }

    #[tokio::test]
    async fn list_is_ordered_by_id() {
        let store = MemoryWeaponStore::new();
        for power in [5, 3, 9] {
            store.insert(&sword(power)).await.unwrap();
        }
        let powers: Vec<i64> = store
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|w| w.power)
            .collect();
        assert_eq!(powers, vec![5, 3, 9]);
    }
}
