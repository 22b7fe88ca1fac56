//! Transfer objects for the HTTP surface.
//!
//! DTOs are ephemeral per-request shapes, decoupled from the persistence
//! schema. Validation runs before any repository call and reports
//! [`CoreError::Validation`](campus_core::error::CoreError).

pub mod course;
pub mod student;

pub use course::{CourseCreateDto, CourseDto};
pub use student::{StudentCreateDto, StudentDto};
