//! Repository for the `roles` and `user_roles` tables.

use sesame_core::types::DbId;
use sqlx::PgExecutor;

/// Provides the single role operation the auth flow needs: assigning the
/// default role at registration. Deeper authorization modeling is out of
/// scope.
pub struct RoleRepo;

impl RoleRepo {
    /// Link a freshly created user to the default `user` role.
    ///
    /// The role is looked up by name inside the statement; if the seed row
    /// is missing, the not-null violation fails the enclosing transaction.
    pub async fn assign_default(db: impl PgExecutor<'_>, user_id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO user_roles (user_id, role_id)
             VALUES ($1, (SELECT id FROM roles WHERE name = 'user'))",
        )
        .bind(user_id)
        .execute(db)
        .await?;
        Ok(())
    }
}
