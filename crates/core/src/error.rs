//! Domain error taxonomy.
//!
//! Every business-rule failure in the authentication flow maps to exactly one
//! variant here. The HTTP layer owns the translation to status codes; this
//! enum only names the outcome.

/// Domain-level errors shared across crates.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Required input is missing or empty. Raised before any storage access.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A registration attempted to reuse an existing email address.
    #[error("Email already in use")]
    DuplicateEmail,

    /// Authentication failed. The message is deliberately identical for
    /// unknown emails and wrong passwords, and for missing versus
    /// invalid/expired session tokens the caller only sees "unauthorized".
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The account exists and the caller may even hold valid credentials,
    /// but the account is deactivated.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// An unexpected internal fault. Never exposes detail to the caller.
    #[error("Internal error: {0}")]
    Internal(String),
}
