pub mod health;
pub mod weapons;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /weapons                                         list, create, delete (400: no id)
/// /weapons/{id}                                    get, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/weapons", weapons::router())
}
