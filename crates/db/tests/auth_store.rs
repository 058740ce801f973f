//! Integration tests for the user, session, role, and login-attempt
//! repositories against a real PostgreSQL schema.

use sqlx::PgPool;

use sesame_db::models::session::CreateSession;
use sesame_db::models::user::CreateUser;
use sesame_db::repositories::{LoginAttemptRepo, RoleRepo, SessionRepo, UserRepo};

fn test_user(email: &str) -> CreateUser {
    CreateUser {
        email: email.to_string(),
        password_hash: "$argon2id$fake-hash-for-tests".to_string(),
        family_name: Some("Doe".to_string()),
        given_name: Some("Jane".to_string()),
    }
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// A created user comes back with generated id, active flag, and timestamp.
#[sqlx::test(migrations = "./migrations")]
async fn test_create_and_find_user(pool: PgPool) {
    let created = UserRepo::create(&pool, &test_user("jane@example.com"))
        .await
        .expect("user creation should succeed");

    assert!(created.id > 0);
    assert!(created.is_active, "new users start active");
    assert_eq!(created.email, "jane@example.com");

    let found = UserRepo::find_by_email(&pool, "jane@example.com")
        .await
        .expect("lookup should succeed")
        .expect("user should exist");
    assert_eq!(found.id, created.id);
    assert_eq!(found.password_hash, created.password_hash);
}

/// Email lookup is exact: no case folding, no trimming.
#[sqlx::test(migrations = "./migrations")]
async fn test_find_by_email_is_case_sensitive(pool: PgPool) {
    UserRepo::create(&pool, &test_user("jane@example.com"))
        .await
        .expect("user creation should succeed");

    let found = UserRepo::find_by_email(&pool, "Jane@Example.com")
        .await
        .expect("lookup should succeed");
    assert!(found.is_none(), "differently-cased email must not match");
}

/// A second insert with the same email violates the unique constraint.
#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_email_hits_unique_constraint(pool: PgPool) {
    UserRepo::create(&pool, &test_user("dup@example.com"))
        .await
        .expect("first creation should succeed");

    let err = UserRepo::create(&pool, &test_user("dup@example.com"))
        .await
        .expect_err("second creation must fail");

    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
            assert_eq!(db_err.constraint(), Some("uq_users_email"));
        }
        other => panic!("expected a database error, got {other:?}"),
    }
}

/// Deactivation flips the flag once and reports whether a row changed.
#[sqlx::test(migrations = "./migrations")]
async fn test_deactivate_user(pool: PgPool) {
    let user = UserRepo::create(&pool, &test_user("gone@example.com"))
        .await
        .expect("user creation should succeed");

    assert!(UserRepo::deactivate(&pool, user.id).await.unwrap());
    // Already inactive: no row matches the guard.
    assert!(!UserRepo::deactivate(&pool, user.id).await.unwrap());

    let found = UserRepo::find_by_email(&pool, "gone@example.com")
        .await
        .unwrap()
        .unwrap();
    assert!(!found.is_active);
}

// ---------------------------------------------------------------------------
// Roles
// ---------------------------------------------------------------------------

/// Default role assignment writes one user_roles row pointing at 'user'.
#[sqlx::test(migrations = "./migrations")]
async fn test_assign_default_role(pool: PgPool) {
    let user = UserRepo::create(&pool, &test_user("role@example.com"))
        .await
        .expect("user creation should succeed");

    RoleRepo::assign_default(&pool, user.id)
        .await
        .expect("role assignment should succeed");

    let (count,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM user_roles ur
         JOIN roles r ON ur.role_id = r.id
         WHERE ur.user_id = $1 AND r.name = 'user'",
    )
    .bind(user.id)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(count, 1);
}

// ---------------------------------------------------------------------------
// Sessions
// ---------------------------------------------------------------------------

/// A live session resolves to its owner's identity through the join.
#[sqlx::test(migrations = "./migrations")]
async fn test_find_identity_for_live_session(pool: PgPool) {
    let user = UserRepo::create(&pool, &test_user("owner@example.com"))
        .await
        .unwrap();
    SessionRepo::create(
        &pool,
        &CreateSession {
            user_id: user.id,
            token: "tok-live".to_string(),
            expires_at: chrono::Utc::now() + chrono::Duration::hours(24),
        },
    )
    .await
    .expect("session creation should succeed");

    let identity = SessionRepo::find_identity(&pool, "tok-live")
        .await
        .expect("lookup should succeed")
        .expect("live session should resolve");
    assert_eq!(identity.user_id, user.id);
    assert_eq!(identity.email, "owner@example.com");
    assert_eq!(identity.family_name.as_deref(), Some("Doe"));
}

/// An unknown token resolves to nothing.
#[sqlx::test(migrations = "./migrations")]
async fn test_find_identity_unknown_token(pool: PgPool) {
    let identity = SessionRepo::find_identity(&pool, "no-such-token")
        .await
        .expect("lookup should succeed");
    assert!(identity.is_none());
}

/// An expired session no longer resolves, without any row being deleted.
#[sqlx::test(migrations = "./migrations")]
async fn test_find_identity_expired_session(pool: PgPool) {
    let user = UserRepo::create(&pool, &test_user("late@example.com"))
        .await
        .unwrap();
    SessionRepo::create(
        &pool,
        &CreateSession {
            user_id: user.id,
            token: "tok-expired".to_string(),
            expires_at: chrono::Utc::now() - chrono::Duration::hours(1),
        },
    )
    .await
    .unwrap();

    let identity = SessionRepo::find_identity(&pool, "tok-expired")
        .await
        .unwrap();
    assert!(identity.is_none(), "expired session must not authenticate");
}

/// A deactivated session and a deactivated owner both stop resolving.
#[sqlx::test(migrations = "./migrations")]
async fn test_find_identity_respects_active_flags(pool: PgPool) {
    let user = UserRepo::create(&pool, &test_user("flags@example.com"))
        .await
        .unwrap();
    SessionRepo::create(
        &pool,
        &CreateSession {
            user_id: user.id,
            token: "tok-flags".to_string(),
            expires_at: chrono::Utc::now() + chrono::Duration::hours(24),
        },
    )
    .await
    .unwrap();

    assert!(SessionRepo::deactivate(&pool, "tok-flags").await.unwrap());
    assert!(SessionRepo::find_identity(&pool, "tok-flags")
        .await
        .unwrap()
        .is_none());

    // Fresh session for the same user, then deactivate the user instead.
    SessionRepo::create(
        &pool,
        &CreateSession {
            user_id: user.id,
            token: "tok-flags-2".to_string(),
            expires_at: chrono::Utc::now() + chrono::Duration::hours(24),
        },
    )
    .await
    .unwrap();
    UserRepo::deactivate(&pool, user.id).await.unwrap();

    assert!(SessionRepo::find_identity(&pool, "tok-flags-2")
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Login attempts
// ---------------------------------------------------------------------------

/// Attempts append in order and keep their internal reason strings.
#[sqlx::test(migrations = "./migrations")]
async fn test_login_attempts_append_only(pool: PgPool) {
    let user = UserRepo::create(&pool, &test_user("audit@example.com"))
        .await
        .unwrap();

    LoginAttemptRepo::record(&pool, None, "audit@example.com", false, "email not found")
        .await
        .unwrap();
    LoginAttemptRepo::record(&pool, Some(user.id), "audit@example.com", false, "bad password")
        .await
        .unwrap();
    LoginAttemptRepo::record(&pool, Some(user.id), "audit@example.com", true, "success")
        .await
        .unwrap();

    let attempts = LoginAttemptRepo::list_for_email(&pool, "audit@example.com")
        .await
        .unwrap();
    assert_eq!(attempts.len(), 3);
    assert_eq!(attempts[0].user_id, None);
    assert_eq!(attempts[0].reason, "email not found");
    assert!(!attempts[1].succeeded);
    assert_eq!(attempts[1].user_id, Some(user.id));
    assert!(attempts[2].succeeded);
    assert_eq!(attempts[2].reason, "success");
}
