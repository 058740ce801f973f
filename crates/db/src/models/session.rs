//! Session model and DTOs.

use sesame_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A session row from the `sessions` table.
///
/// A session authenticates requests only while `is_active` is true AND
/// `expires_at` is in the future. Expiry is enforced at read time; there is
/// no background reaper.
#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub id: DbId,
    pub user_id: DbId,
    pub token: String,
    pub created_at: Timestamp,
    pub expires_at: Timestamp,
    pub is_active: bool,
}

/// DTO for creating a new session at login.
pub struct CreateSession {
    pub user_id: DbId,
    pub token: String,
    pub expires_at: Timestamp,
}

/// The user identity resolved by the session-validation join.
///
/// This is the row shape returned when a presented token matches a live
/// session owned by an active user.
#[derive(Debug, Clone, FromRow)]
pub struct SessionIdentity {
    pub user_id: DbId,
    pub email: String,
    pub family_name: Option<String>,
    pub given_name: Option<String>,
}
