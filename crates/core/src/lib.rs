//! Shared domain types and errors for the campus backend.

pub mod error;
pub mod types;
