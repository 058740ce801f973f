//! Handlers for the `/api/auth` resource (register, login, me).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sesame_core::error::CoreError;
use sesame_core::types::{DbId, Timestamp};
use sesame_db::models::session::CreateSession;
use sesame_db::models::user::{CreateUser, PublicUser, User};
use sesame_db::repositories::{LoginAttemptRepo, RoleRepo, SessionRepo, UserRepo};

use crate::auth::password::{hash_password, verify_password};
use crate::auth::token::generate_session_token;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Session lifetime: a token authenticates for exactly this long after issuance.
const SESSION_TTL_HOURS: i64 = 24;

/// The one message returned for both unknown-email and wrong-password
/// failures. Keeping it byte-identical is deliberate: the response must not
/// reveal whether the email exists.
const INVALID_CREDENTIALS_MSG: &str = "Invalid email or password";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/auth/register`.
///
/// All fields default to empty/none so that a missing email or password is
/// reported as a 400 validation error rather than a deserialization
/// rejection. The name fields keep the French wire keys existing clients
/// send.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default, rename = "nom")]
    pub family_name: Option<String>,
    #[serde(default, rename = "prenom")]
    pub given_name: Option<String>,
}

/// Request body for `POST /api/auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Response body for a successful registration.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: PublicUser,
}

/// Response body for a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    /// The session token, returned once in plaintext and never re-displayed.
    pub token: String,
    pub user: UserInfo,
    #[serde(rename = "expiresAt")]
    pub expires_at: Timestamp,
}

/// Public user info embedded in [`LoginResponse`] and returned by `me`.
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: DbId,
    pub email: String,
    #[serde(rename = "nom")]
    pub family_name: Option<String>,
    #[serde(rename = "prenom")]
    pub given_name: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/register
///
/// Create a user and its default role assignment in one transaction.
/// Either both rows land or neither does; a duplicate email rolls back
/// before any write.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<RegisterResponse>)> {
    // 1. Validate before touching storage.
    if input.email.is_empty() || input.password.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Email and password are required".into(),
        )));
    }

    let mut tx = state.pool.begin().await?;

    // 2. Check-then-insert inside the transaction; the unique index on
    //    email is the backstop if two registrations race past this check.
    if UserRepo::find_by_email(&mut *tx, &input.email)
        .await?
        .is_some()
    {
        tx.rollback().await?;
        return Err(AppError::Core(CoreError::DuplicateEmail));
    }

    // 3. Hash the password (salted Argon2id, PHC string).
    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::Core(CoreError::Internal(format!("Password hashing error: {e}"))))?;

    // 4. Insert the user and its default role assignment.
    let user = UserRepo::create(
        &mut *tx,
        &CreateUser {
            email: input.email,
            password_hash,
            family_name: input.family_name,
            given_name: input.given_name,
        },
    )
    .await?;
    RoleRepo::assign_default(&mut *tx, user.id).await?;

    tx.commit().await?;

    tracing::info!(user_id = user.id, "user registered");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User created successfully".to_string(),
            user: PublicUser::from(user),
        }),
    ))
}

/// POST /api/auth/login
///
/// Authenticate with email + password and issue a session token.
///
/// The whole call runs in one transaction that commits on every business
/// outcome, including failures: the audit row written for the attempt must
/// be durable. Only unexpected faults roll back (implicitly, when the
/// transaction is dropped by `?`).
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let mut tx = state.pool.begin().await?;

    // 1. Find user by email.
    let Some(user) = UserRepo::find_by_email(&mut *tx, &input.email).await? else {
        LoginAttemptRepo::record(&mut *tx, None, &input.email, false, "email not found").await?;
        tx.commit().await?;
        return Err(AppError::Core(CoreError::Unauthorized(
            INVALID_CREDENTIALS_MSG.into(),
        )));
    };

    // 2. Check the account is active.
    if !user.is_active {
        LoginAttemptRepo::record(&mut *tx, Some(user.id), &input.email, false, "account inactive")
            .await?;
        tx.commit().await?;
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is inactive".into(),
        )));
    }

    // 3. Verify the password.
    let password_valid = verify_password(&input.password, &user.password_hash).map_err(|e| {
        AppError::Core(CoreError::Internal(format!(
            "Password verification error: {e}"
        )))
    })?;

    if !password_valid {
        LoginAttemptRepo::record(&mut *tx, Some(user.id), &input.email, false, "bad password")
            .await?;
        tx.commit().await?;
        return Err(AppError::Core(CoreError::Unauthorized(
            INVALID_CREDENTIALS_MSG.into(),
        )));
    }

    // 4. Issue the session and record the successful attempt.
    let token = generate_session_token();
    let expires_at = Utc::now() + chrono::Duration::hours(SESSION_TTL_HOURS);

    let session = SessionRepo::create(
        &mut *tx,
        &CreateSession {
            user_id: user.id,
            token,
            expires_at,
        },
    )
    .await?;
    LoginAttemptRepo::record(&mut *tx, Some(user.id), &input.email, true, "success").await?;

    tx.commit().await?;

    tracing::info!(user_id = user.id, "login succeeded");

    Ok(Json(build_login_response(session.token, &user, expires_at)))
}

/// GET /api/auth/me
///
/// Return the identity resolved by the session-validation extractor. Also
/// serves as the canonical example of a protected route: the `AuthUser`
/// parameter is the gate.
pub async fn me(user: AuthUser) -> Json<UserInfo> {
    Json(UserInfo {
        id: user.id,
        email: user.email,
        family_name: user.family_name,
        given_name: user.given_name,
    })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Build the login response payload from the issued session.
fn build_login_response(token: String, user: &User, expires_at: Timestamp) -> LoginResponse {
    LoginResponse {
        message: "Login successful".to_string(),
        token,
        user: UserInfo {
            id: user.id,
            email: user.email.clone(),
            family_name: user.family_name.clone(),
            given_name: user.given_name.clone(),
        },
        expires_at,
    }
}
