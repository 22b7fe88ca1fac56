//! Entity models.
//!
//! Each entity is a plain struct mirroring its table row. `Student` and
//! `Course` are independent; no shared `Person` base.

pub mod course;
pub mod gender;
pub mod student;

pub use course::Course;
pub use gender::Gender;
pub use student::Student;
