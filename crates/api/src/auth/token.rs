//! Opaque session-token generation.

use uuid::Uuid;

/// Generate a new unguessable session token.
///
/// A v4 UUID carries 122 bits of randomness, which is the unpredictability
/// class the session table relies on. The token is returned to the client
/// once, in plaintext, at login and never re-displayed.
pub fn generate_session_token() -> String {
    Uuid::new_v4().to_string()
}
