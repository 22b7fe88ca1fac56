//! HTTP handlers, one module per resource.

pub mod course;
pub mod student;
