//! Request middleware.
//!
//! Currently only the session-validation extractor that gates protected
//! routes.

pub mod auth;
