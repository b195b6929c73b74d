//! Handlers for the `/weapons` resource.

use armory_core::error::CoreError;
use armory_core::types::DbId;
use armory_db::models::weapon::{CreateWeapon, Weapon};
use armory_db::store::WeaponStore;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/weapons
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Weapon>>> {
    let weapons = state.store.list_all().await?;
    Ok(Json(weapons))
}

/// POST /api/v1/weapons
///
/// The body is taken as raw JSON and decoded by [`CreateWeapon::from_json`]
/// so that every invalid field is reported, not just the first.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Weapon>)> {
    let Json(payload) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let input = CreateWeapon::from_json(&payload).map_err(CoreError::Validation)?;

    let weapon = state.store.insert(&input).await?;
    tracing::info!(weapon_id = weapon.id, "Weapon created");
    Ok((StatusCode::CREATED, Json(weapon)))
}

/// GET /api/v1/weapons/{id}
///
/// A non-numeric id cannot name a weapon, so it is a 404 like any other
/// unknown id.
pub async fn get_by_id(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<Weapon>> {
    let Path(id) = id.map_err(|_| AppError::NotFound("Weapon not found".to_string()))?;
    let weapon = find_or_404(state.store.as_ref(), id).await?;
    Ok(Json(weapon))
}

/// DELETE /api/v1/weapons/{id}
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<StatusCode> {
    let Path(id) = id.map_err(|rejection| {
        AppError::BadRequest(format!("Invalid weapon id: {}", rejection.body_text()))
    })?;

    find_or_404(state.store.as_ref(), id).await?;
    if !state.store.delete_by_id(id).await? {
        // Removed by a concurrent request between lookup and delete.
        return Err(not_found(id));
    }

    tracing::info!(weapon_id = id, "Weapon deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/weapons
///
/// Deleting requires an id in the path.
pub async fn delete_without_id() -> AppResult<StatusCode> {
    Err(AppError::BadRequest("Weapon id not provided".to_string()))
}

// ── Private helpers ──────────────────────────────────────────────────────

async fn find_or_404(store: &dyn WeaponStore, id: DbId) -> AppResult<Weapon> {
    store.get_by_id(id).await?.ok_or_else(|| not_found(id))
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Weapon",
        id,
    })
}
