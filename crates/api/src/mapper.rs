//! Entity ⇄ DTO mapping.
//!
//! Declarative field-by-field conversions; each read-DTO mapping has a
//! reverse mapping using the same field correspondence. Fields absent
//! from a DTO (store-maintained timestamps, the id on create) take the
//! target type's zero value and are never written by the repository.

use campus_db::models::{Course, Student};

use crate::dto::{CourseCreateDto, CourseDto, StudentCreateDto, StudentDto};

impl From<Student> for StudentDto {
    fn from(s: Student) -> Self {
        StudentDto {
            id: s.id,
            student_id: s.student_id,
            first_name: s.first_name,
            last_name: s.last_name,
            date_of_birth: s.date_of_birth,
            gender: s.gender,
            contact: s.contact,
            year_entrance: s.year_entrance,
        }
    }
}

impl From<StudentDto> for Student {
    fn from(dto: StudentDto) -> Self {
        Student {
            id: dto.id,
            student_id: dto.student_id,
            first_name: dto.first_name,
            last_name: dto.last_name,
            date_of_birth: dto.date_of_birth,
            gender: dto.gender,
            contact: dto.contact,
            year_entrance: dto.year_entrance,
            created_at: Default::default(),
            updated_at: Default::default(),
        }
    }
}

impl From<StudentCreateDto> for Student {
    fn from(dto: StudentCreateDto) -> Self {
        Student {
            // Assigned by the store on insert.
            id: 0,
            student_id: dto.student_id,
            first_name: dto.first_name,
            last_name: dto.last_name,
            date_of_birth: dto.date_of_birth,
            gender: dto.gender,
            contact: dto.contact,
            year_entrance: dto.year_entrance,
            created_at: Default::default(),
            updated_at: Default::default(),
        }
    }
}

impl From<Course> for CourseDto {
    fn from(c: Course) -> Self {
        CourseDto {
            id: c.id,
            name: c.name,
            date_created: c.date_created,
        }
    }
}

impl From<CourseDto> for Course {
    fn from(dto: CourseDto) -> Self {
        Course {
            id: dto.id,
            name: dto.name,
            date_created: dto.date_created,
            created_at: Default::default(),
            updated_at: Default::default(),
        }
    }
}

impl From<CourseCreateDto> for Course {
    fn from(dto: CourseCreateDto) -> Self {
        Course {
            id: 0,
            name: dto.name,
            date_created: dto.date_created.unwrap_or_else(chrono::Utc::now),
            created_at: Default::default(),
            updated_at: Default::default(),
        }
    }
}
