//! User entity model and DTOs.

use serde::Serialize;
use sesame_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses
/// directly. Use [`PublicUser`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub password_hash: String,
    pub family_name: Option<String>,
    pub given_name: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
}

/// Safe user representation for API responses (no password hash).
///
/// The name fields keep the original French wire keys (`nom`, `prenom`)
/// that existing clients depend on.
#[derive(Debug, Clone, Serialize)]
pub struct PublicUser {
    pub id: DbId,
    pub email: String,
    #[serde(rename = "nom")]
    pub family_name: Option<String>,
    #[serde(rename = "prenom")]
    pub given_name: Option<String>,
    pub created_at: Timestamp,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        PublicUser {
            id: user.id,
            email: user.email,
            family_name: user.family_name,
            given_name: user.given_name,
            created_at: user.created_at,
        }
    }
}

/// DTO for creating a new user.
#[derive(Debug)]
pub struct CreateUser {
    pub email: String,
    pub password_hash: String,
    pub family_name: Option<String>,
    pub given_name: Option<String>,
}
