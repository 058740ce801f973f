//! Repository for the append-only `login_attempts` table.

use sesame_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::login_attempt::LoginAttempt;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, attempted_email, attempted_at, succeeded, reason";

/// Appends and reads login attempts. There are no update or delete
/// operations: the audit trail is immutable.
pub struct LoginAttemptRepo;

impl LoginAttemptRepo {
    /// Append one attempt row. Called exactly once per login, whatever the
    /// outcome; `user_id` is `None` when the email matched no user.
    pub async fn record(
        db: impl PgExecutor<'_>,
        user_id: Option<DbId>,
        attempted_email: &str,
        succeeded: bool,
        reason: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO login_attempts (user_id, attempted_email, succeeded, reason)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(user_id)
        .bind(attempted_email)
        .bind(succeeded)
        .bind(reason)
        .execute(db)
        .await?;
        Ok(())
    }

    /// List all attempts recorded for an email, oldest first.
    pub async fn list_for_email(
        db: impl PgExecutor<'_>,
        email: &str,
    ) -> Result<Vec<LoginAttempt>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM login_attempts
             WHERE attempted_email = $1
             ORDER BY id"
        );
        sqlx::query_as::<_, LoginAttempt>(&query)
            .bind(email)
            .fetch_all(db)
            .await
    }
}
