//! Route definitions for the `/weapons` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::weapon;
use crate::state::AppState;

/// Weapon routes mounted at `/weapons`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// DELETE /       -> delete_without_id (always 400)
/// GET    /{id}   -> get_by_id
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(weapon::list)
                .post(weapon::create)
                .delete(weapon::delete_without_id),
        )
        .route("/{id}", get(weapon::get_by_id).delete(weapon::delete))
}
