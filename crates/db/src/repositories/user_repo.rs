//! Repository for the `users` table.

use sesame_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::user::{CreateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, password_hash, family_name, given_name, is_active, created_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    ///
    /// The `uq_users_email` constraint is the backstop against two racing
    /// registrations with the same email; a violation surfaces as a
    /// database error with code 23505.
    pub async fn create(db: impl PgExecutor<'_>, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (email, password_hash, family_name, given_name)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.family_name)
            .bind(&input.given_name)
            .fetch_one(db)
            .await
    }

    /// Find a user by email (exact, case-sensitive match).
    pub async fn find_by_email(
        db: impl PgExecutor<'_>,
        email: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(db)
            .await
    }

    /// Soft-deactivate a user by setting `is_active = false`.
    ///
    /// Deactivation happens out-of-band of the auth flow; after it, login
    /// and session validation both reject the user. Returns `true` if the
    /// row was updated.
    pub async fn deactivate(db: impl PgExecutor<'_>, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE users SET is_active = false WHERE id = $1 AND is_active = true")
                .bind(id)
                .execute(db)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
