//! Credential and session-token primitives.
//!
//! Password hashing lives in [`password`]; opaque session-token generation
//! in [`token`]. The session-validation extractor that consumes tokens is in
//! `crate::middleware::auth`.

pub mod password;
pub mod token;
