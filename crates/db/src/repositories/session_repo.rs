//! Repository for the `sessions` table.

use sqlx::PgExecutor;

use crate::models::session::{CreateSession, Session, SessionIdentity};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, token, created_at, expires_at, is_active";

/// Provides operations for issued session tokens.
pub struct SessionRepo;

impl SessionRepo {
    /// Insert a new session, returning the created row.
    pub async fn create(
        db: impl PgExecutor<'_>,
        input: &CreateSession,
    ) -> Result<Session, sqlx::Error> {
        let query = format!(
            "INSERT INTO sessions (user_id, token, expires_at)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(input.user_id)
            .bind(&input.token)
            .bind(input.expires_at)
            .fetch_one(db)
            .await
    }

    /// Resolve the owning user of a presented token.
    ///
    /// Single read-only query joining sessions and users. Only returns a row
    /// while the session is active and unexpired AND the owning user is
    /// active; the caller cannot tell which condition failed.
    pub async fn find_identity(
        db: impl PgExecutor<'_>,
        token: &str,
    ) -> Result<Option<SessionIdentity>, sqlx::Error> {
        sqlx::query_as::<_, SessionIdentity>(
            "SELECT u.id AS user_id, u.email, u.family_name, u.given_name
             FROM sessions s
             JOIN users u ON s.user_id = u.id
             WHERE s.token = $1
               AND s.is_active = true
               AND s.expires_at > now()
               AND u.is_active = true",
        )
        .bind(token)
        .fetch_optional(db)
        .await
    }

    /// Soft-deactivate a session by token. Returns `true` if the row was
    /// updated. Used by out-of-band administration, not by the auth flow.
    pub async fn deactivate(db: impl PgExecutor<'_>, token: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE sessions SET is_active = false WHERE token = $1 AND is_active = true",
        )
        .bind(token)
        .execute(db)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
