//! Repository for the `students` table.

use async_trait::async_trait;
use campus_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::Student;
use crate::repositories::repository::{Persist, Predicate, Repository};
use crate::DbError;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, student_id, first_name, last_name, date_of_birth, gender, contact, \
     year_entrance, created_at, updated_at";

#[async_trait]
impl Persist for Student {
    const ENTITY: &'static str = "Student";

    fn id(&self) -> DbId {
        self.id
    }

    /// Students are listed ordered by their external student code.
    async fn fetch_all(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students ORDER BY student_id ASC");
        sqlx::query_as::<_, Student>(&query).fetch_all(pool).await
    }

    async fn insert(conn: &mut PgConnection, entity: &Self) -> Result<Self, sqlx::Error> {
        let query = format!(
            "INSERT INTO students
                (student_id, first_name, last_name, date_of_birth, gender, contact, year_entrance)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(&entity.student_id)
            .bind(&entity.first_name)
            .bind(&entity.last_name)
            .bind(entity.date_of_birth)
            .bind(entity.gender)
            .bind(&entity.contact)
            .bind(entity.year_entrance)
            .fetch_one(conn)
            .await
    }

    async fn replace(conn: &mut PgConnection, entity: &Self) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE students SET
                student_id = $2,
                first_name = $3,
                last_name = $4,
                date_of_birth = $5,
                gender = $6,
                contact = $7,
                year_entrance = $8,
                updated_at = NOW()
             WHERE id = $1",
        )
        .bind(entity.id)
        .bind(&entity.student_id)
        .bind(&entity.first_name)
        .bind(&entity.last_name)
        .bind(entity.date_of_birth)
        .bind(entity.gender)
        .bind(&entity.contact)
        .bind(entity.year_entrance)
        .execute(conn)
        .await?;
        Ok(result.rows_affected())
    }

    async fn delete(conn: &mut PgConnection, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected())
    }
}

/// Unit of work for students: the generic repository plus student-specific
/// uniqueness checks and attach-and-replace update semantics.
pub struct StudentRepo {
    pool: PgPool,
    repo: Repository<Student>,
}

impl StudentRepo {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repo: Repository::new(pool.clone()),
            pool,
        }
    }

    /// All students, ordered by student code.
    pub async fn get_all(&self) -> Result<Vec<Student>, DbError> {
        self.repo.get_all(None).await
    }

    /// All students matching `filter`, ordered by student code.
    pub async fn get_all_filtered(&self, filter: Predicate<Student>) -> Result<Vec<Student>, DbError> {
        self.repo.get_all(Some(filter)).await
    }

    /// Find a student by internal id, `None` when absent.
    pub async fn find_by_id(&mut self, id: DbId, tracked: bool) -> Result<Option<Student>, DbError> {
        self.repo
            .get(Some(Box::new(move |s: &Student| s.id == id)), tracked)
            .await
    }

    /// Insert and commit, returning the stored row with its assigned id.
    pub async fn create(&mut self, student: Student) -> Result<Student, DbError> {
        self.repo.create(student);
        let mut inserted = self.repo.save().await?;
        // Exactly one insert was scheduled above.
        inserted.pop().ok_or(DbError::Sqlx(sqlx::Error::RowNotFound))
    }

    /// Full attach-and-replace followed by save. `NotFound` when no row
    /// has the given id.
    pub async fn update(&mut self, student: Student) -> Result<Student, DbError> {
        let id = student.id;
        self.repo.attach(&student);
        self.repo.update(student)?;
        self.repo.save().await?;
        self.find_by_id(id, false)
            .await?
            .ok_or(DbError::NotFound {
                entity: Student::ENTITY,
                id,
            })
    }

    /// Remove a tracked student and commit.
    pub async fn remove(&mut self, student: &Student) -> Result<(), DbError> {
        self.repo.remove(student)?;
        self.repo.save().await?;
        Ok(())
    }

    /// Case-insensitive, whitespace-trimmed uniqueness check on the
    /// external student code.
    pub async fn exists_by_student_id(&self, student_id: &str) -> Result<bool, DbError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(
                SELECT 1 FROM students
                WHERE LOWER(TRIM(student_id)) = LOWER(TRIM($1)))",
        )
        .bind(student_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    /// Case-insensitive, whitespace-trimmed check on first name.
    pub async fn exists_by_name(&self, first_name: &str) -> Result<bool, DbError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(
                SELECT 1 FROM students
                WHERE LOWER(TRIM(first_name)) = LOWER(TRIM($1)))",
        )
        .bind(first_name)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }
}
