//! Session-token authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use sesame_core::error::CoreError;
use sesame_core::types::DbId;
use sesame_db::repositories::SessionRepo;

use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user resolved from the raw session token in the
/// `Authorization` header.
///
/// The header carries the token itself, not a `Bearer`-prefixed form; that
/// is the wire contract existing clients were built against. Use this as an
/// extractor parameter in any handler that requires authentication:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.id, "handling request");
///     Ok(Json(()))
/// }
/// ```
///
/// Each extraction runs one read-only query joining sessions and users;
/// results are never cached, so deactivation and expiry take effect on the
/// very next request.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id.
    pub id: DbId,
    pub email: String,
    pub family_name: Option<String>,
    pub given_name: Option<String>,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing authentication token".into(),
                ))
            })?;

        // One merged rejection for never-existed, expired, session
        // deactivated, and user deactivated.
        let identity = SessionRepo::find_identity(&state.pool, token)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
            })?;

        Ok(AuthUser {
            id: identity.user_id,
            email: identity.email,
            family_name: identity.family_name,
            given_name: identity.given_name,
        })
    }
}
