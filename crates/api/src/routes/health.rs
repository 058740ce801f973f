//! Route definition for the health check.

use axum::routing::get;
use axum::Router;

use crate::handlers::health;
use crate::state::AppState;

/// Routes mounted at the `/api` level.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health::health))
}
