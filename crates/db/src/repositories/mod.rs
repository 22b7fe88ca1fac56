//! Repository layer.
//!
//! [`Repository`] is the generic per-request unit of work; the entity
//! repositories wrap it with ordering, uniqueness checks, and
//! attach-and-replace update semantics.

pub mod course_repo;
pub mod repository;
pub mod student_repo;

pub use course_repo::CourseRepo;
pub use repository::{Persist, Predicate, Repository};
pub use student_repo::StudentRepo;
