//! Repository for the `courses` table.

use async_trait::async_trait;
use campus_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::Course;
use crate::repositories::repository::{Persist, Predicate, Repository};
use crate::DbError;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, date_created, created_at, updated_at";

#[async_trait]
impl Persist for Course {
    const ENTITY: &'static str = "Course";

    fn id(&self) -> DbId {
        self.id
    }

    /// Courses are listed ordered by internal id.
    async fn fetch_all(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM courses ORDER BY id ASC");
        sqlx::query_as::<_, Course>(&query).fetch_all(pool).await
    }

    async fn insert(conn: &mut PgConnection, entity: &Self) -> Result<Self, sqlx::Error> {
        let query = format!(
            "INSERT INTO courses (name, date_created)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(&entity.name)
            .bind(entity.date_created)
            .fetch_one(conn)
            .await
    }

    async fn replace(conn: &mut PgConnection, entity: &Self) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE courses SET
                name = $2,
                date_created = $3,
                updated_at = NOW()
             WHERE id = $1",
        )
        .bind(entity.id)
        .bind(&entity.name)
        .bind(entity.date_created)
        .execute(conn)
        .await?;
        Ok(result.rows_affected())
    }

    async fn delete(conn: &mut PgConnection, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected())
    }
}

/// Unit of work for courses.
pub struct CourseRepo {
    pool: PgPool,
    repo: Repository<Course>,
}

impl CourseRepo {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repo: Repository::new(pool.clone()),
            pool,
        }
    }

    /// All courses, ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Course>, DbError> {
        self.repo.get_all(None).await
    }

    /// All courses matching `filter`, ordered by id.
    pub async fn get_all_filtered(&self, filter: Predicate<Course>) -> Result<Vec<Course>, DbError> {
        self.repo.get_all(Some(filter)).await
    }

    /// Find a course by id, `None` when absent.
    pub async fn find_by_id(&mut self, id: DbId, tracked: bool) -> Result<Option<Course>, DbError> {
        self.repo
            .get(Some(Box::new(move |c: &Course| c.id == id)), tracked)
            .await
    }

    /// Insert and commit, returning the stored row with its assigned id.
    pub async fn create(&mut self, course: Course) -> Result<Course, DbError> {
        self.repo.create(course);
        let mut inserted = self.repo.save().await?;
        // Exactly one insert was scheduled above.
        inserted.pop().ok_or(DbError::Sqlx(sqlx::Error::RowNotFound))
    }

    /// Full attach-and-replace followed by save. `NotFound` when no row
    /// has the given id.
    pub async fn update(&mut self, course: Course) -> Result<Course, DbError> {
        let id = course.id;
        self.repo.attach(&course);
        self.repo.update(course)?;
        self.repo.save().await?;
        self.find_by_id(id, false)
            .await?
            .ok_or(DbError::NotFound {
                entity: Course::ENTITY,
                id,
            })
    }

    /// Remove a tracked course and commit.
    pub async fn remove(&mut self, course: &Course) -> Result<(), DbError> {
        self.repo.remove(course)?;
        self.repo.save().await?;
        Ok(())
    }

    /// Case-insensitive, whitespace-trimmed uniqueness check on name.
    pub async fn exists_by_name(&self, name: &str) -> Result<bool, DbError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(
                SELECT 1 FROM courses
                WHERE LOWER(TRIM(name)) = LOWER(TRIM($1)))",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }
}
