//! Weapon entity model and DTOs.

use armory_core::fields::{self, FieldErrors};
use armory_core::types::DbId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

/// A weapon row from the `weapons` table.
///
/// This is also the transfer representation returned to clients.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Weapon {
    pub id: DbId,
    pub power: i64,
    pub rarity: String,
    pub value: f64,
}

/// DTO for creating a new weapon. The `id` is assigned by storage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateWeapon {
    pub power: i64,
    pub rarity: String,
    pub value: f64,
}

impl CreateWeapon {
    /// Decode a create payload, collecting every field error.
    ///
    /// Unknown keys, including a client-supplied `id`, are ignored.
    pub fn from_json(payload: &Value) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();
        let Some(obj) = fields::as_object(payload, &mut errors) else {
            return Err(errors);
        };

        let power = fields::integer_field(obj, "power", &mut errors);
        let rarity = fields::string_field(obj, "rarity", &mut errors);
        let value = fields::number_field(obj, "value", &mut errors);

        match (power, rarity, value) {
            (Some(power), Some(rarity), Some(value)) if errors.is_empty() => Ok(Self {
                power,
                rarity,
                value,
            }),
            _ => Err(errors),
        }
    }

    /// Attach a storage-assigned id.
    pub fn into_weapon(self, id: DbId) -> Weapon {
        Weapon {
            id,
            power: self.power,
            rarity: self.rarity,
            value: self.value,
        }
    }
}
