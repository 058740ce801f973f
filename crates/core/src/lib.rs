//! Shared domain types for the sesame authentication backend.
//!
//! Holds the primitive type aliases and the domain error taxonomy used by
//! both the data layer and the API server.

pub mod error;
pub mod types;
