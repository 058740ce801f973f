//! Login attempt audit model.
//!
//! Rows are append-only: exactly one is written per login call, for every
//! outcome, and none is ever mutated or deleted.

use sesame_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A single login attempt from the `login_attempts` table.
#[derive(Debug, Clone, FromRow)]
pub struct LoginAttempt {
    pub id: DbId,
    /// `None` when the attempted email matched no user.
    pub user_id: Option<DbId>,
    pub attempted_email: String,
    pub attempted_at: Timestamp,
    pub succeeded: bool,
    /// Internal reason string. Retains distinctions (unknown email, bad
    /// password, inactive) that the HTTP surface deliberately merges.
    pub reason: String,
}
