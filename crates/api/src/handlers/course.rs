//! Handlers for the `/courses` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use campus_core::error::CoreError;
use campus_core::types::DbId;
use campus_db::models::Course;
use campus_db::repositories::CourseRepo;

use crate::dto::{CourseCreateDto, CourseDto};
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/courses
///
/// List all courses, ordered by id.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<CourseDto>>>> {
    let repo = CourseRepo::new(state.pool.clone());
    let courses = repo.get_all().await?;
    let data: Vec<CourseDto> = courses.into_iter().map(CourseDto::from).collect();
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/courses/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<CourseDto>>> {
    let mut repo = CourseRepo::new(state.pool.clone());
    let course = repo
        .find_by_id(id, false)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id,
        }))?;
    Ok(Json(DataResponse { data: course.into() }))
}

/// POST /api/v1/courses
///
/// Validates the payload and pre-checks name uniqueness before
/// inserting; a duplicate yields 409.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CourseCreateDto>,
) -> AppResult<(StatusCode, Json<DataResponse<CourseDto>>)> {
    input.validate().map_err(AppError::Core)?;

    let mut repo = CourseRepo::new(state.pool.clone());
    if repo.exists_by_name(&input.name).await? {
        return Err(AppError::Core(CoreError::DuplicateKey(format!(
            "course name '{}' already exists",
            input.name.trim()
        ))));
    }

    let course = repo.create(Course::from(input)).await?;
    tracing::info!(course_id = course.id, name = %course.name, "Course created");
    Ok((
        StatusCode::CREATED,
        Json(DataResponse { data: course.into() }),
    ))
}

/// PUT /api/v1/courses/{id}
///
/// Full replace. The path id must match the body id; an absent record
/// yields 404.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CourseDto>,
) -> AppResult<Json<DataResponse<CourseDto>>> {
    if input.id != id {
        return Err(AppError::Core(CoreError::Validation(format!(
            "path id {id} does not match body id {}",
            input.id
        ))));
    }
    input.validate().map_err(AppError::Core)?;

    let mut repo = CourseRepo::new(state.pool.clone());
    let course = repo.update(Course::from(input)).await?;
    tracing::info!(course_id = id, "Course updated");
    Ok(Json(DataResponse { data: course.into() }))
}

/// DELETE /api/v1/courses/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let mut repo = CourseRepo::new(state.pool.clone());
    let course = repo
        .find_by_id(id, true)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id,
        }))?;
    repo.remove(&course).await?;
    tracing::info!(course_id = id, "Course deleted");
    Ok(StatusCode::NO_CONTENT)
}
