use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool is internally reference-counted and
/// the config is behind `Arc`). There is no other cross-request mutable
/// state: every request works through the pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: sesame_db::DbPool,
    /// Server configuration, loaded once at startup.
    pub config: Arc<ServerConfig>,
}
