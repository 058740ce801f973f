pub mod auth;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /api/auth/register   register (public)
/// /api/auth/login      login (public)
/// /api/auth/me         resolved identity (requires session token)
/// /api/health          database round-trip health check
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .merge(health::router())
}
