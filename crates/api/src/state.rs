use std::sync::Arc;

use armory_db::store::WeaponStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Weapon storage (PostgreSQL in production, in-memory in tests).
    pub store: Arc<dyn WeaponStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
