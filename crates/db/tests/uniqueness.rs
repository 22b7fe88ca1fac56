//! Uniqueness semantics: case-insensitive, whitespace-trimmed checks and
//! the commit-time unique indexes backing them.

use campus_db::models::{Course, Gender, Student};
use campus_db::repositories::{CourseRepo, StudentRepo};
use chrono::TimeZone;
use sqlx::PgPool;

fn new_student(code: &str, first_name: &str) -> Student {
    Student {
        id: 0,
        student_id: code.to_string(),
        first_name: first_name.to_string(),
        last_name: "Lovelace".to_string(),
        date_of_birth: chrono::Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap(),
        gender: Gender::Female,
        contact: None,
        year_entrance: chrono::Utc.with_ymd_and_hms(2019, 9, 1, 0, 0, 0).unwrap(),
        created_at: Default::default(),
        updated_at: Default::default(),
    }
}

fn new_course(name: &str) -> Course {
    Course {
        id: 0,
        name: name.to_string(),
        date_created: chrono::Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap(),
        created_at: Default::default(),
        updated_at: Default::default(),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_exists_by_name_ignores_case_and_whitespace(pool: PgPool) {
    let mut repo = CourseRepo::new(pool);
    repo.create(new_course("Math ")).await.unwrap();

    assert!(repo.exists_by_name("math").await.unwrap());
    assert!(repo.exists_by_name("  MATH").await.unwrap());
    assert!(!repo.exists_by_name("physics").await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_exists_by_student_id_ignores_case(pool: PgPool) {
    let mut repo = StudentRepo::new(pool);
    repo.create(new_student("S001", "Ada")).await.unwrap();

    assert!(repo.exists_by_student_id("s001").await.unwrap());
    assert!(repo.exists_by_student_id(" S001 ").await.unwrap());
    assert!(!repo.exists_by_student_id("S002").await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_exists_by_first_name(pool: PgPool) {
    let mut repo = StudentRepo::new(pool);
    repo.create(new_student("S001", "Ada ")).await.unwrap();

    assert!(repo.exists_by_name("ada").await.unwrap());
    assert!(!repo.exists_by_name("alan").await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_student_code_rejected_at_commit(pool: PgPool) {
    let mut repo = StudentRepo::new(pool);
    repo.create(new_student("S001", "Ada")).await.unwrap();

    // Differs only in case; the uq_ index fires at commit time.
    let result = repo.create(new_student("s001", "Alan")).await;
    assert!(result.is_err(), "case-variant duplicate must be rejected");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_course_name_rejected_at_commit(pool: PgPool) {
    let mut repo = CourseRepo::new(pool);
    repo.create(new_course("Algebra")).await.unwrap();

    let result = repo.create(new_course(" algebra ")).await;
    assert!(result.is_err(), "trimmed duplicate must be rejected");
}
