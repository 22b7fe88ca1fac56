//! Handlers for the `/students` resource.
//!
//! Each request gets its own [`StudentRepo`] unit of work; DTO ↔ entity
//! translation happens here via the mapper, never in the repository.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use campus_core::error::CoreError;
use campus_core::types::DbId;
use campus_db::models::Student;
use campus_db::repositories::StudentRepo;

use crate::dto::{StudentCreateDto, StudentDto};
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/students
///
/// List all students, ordered by student code.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<StudentDto>>>> {
    let repo = StudentRepo::new(state.pool.clone());
    let students = repo.get_all().await?;
    let data: Vec<StudentDto> = students.into_iter().map(StudentDto::from).collect();
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/students/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<StudentDto>>> {
    let mut repo = StudentRepo::new(state.pool.clone());
    let student = repo
        .find_by_id(id, false)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id,
        }))?;
    Ok(Json(DataResponse {
        data: student.into(),
    }))
}

/// POST /api/v1/students
///
/// Validates the payload and pre-checks student-code uniqueness before
/// inserting; a duplicate yields 409.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<StudentCreateDto>,
) -> AppResult<(StatusCode, Json<DataResponse<StudentDto>>)> {
    input.validate().map_err(AppError::Core)?;

    let mut repo = StudentRepo::new(state.pool.clone());
    if repo.exists_by_student_id(&input.student_id).await? {
        return Err(AppError::Core(CoreError::DuplicateKey(format!(
            "student_id '{}' already exists",
            input.student_id.trim()
        ))));
    }

    let student = repo.create(Student::from(input)).await?;
    tracing::info!(student_id = student.id, code = %student.student_id, "Student created");
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: student.into(),
        }),
    ))
}

/// PUT /api/v1/students/{id}
///
/// Full replace. The path id must match the body id; an absent record
/// yields 404.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<StudentDto>,
) -> AppResult<Json<DataResponse<StudentDto>>> {
    if input.id != id {
        return Err(AppError::Core(CoreError::Validation(format!(
            "path id {id} does not match body id {}",
            input.id
        ))));
    }
    input.validate().map_err(AppError::Core)?;

    let mut repo = StudentRepo::new(state.pool.clone());
    let student = repo.update(Student::from(input)).await?;
    tracing::info!(student_id = id, "Student updated");
    Ok(Json(DataResponse {
        data: student.into(),
    }))
}

/// DELETE /api/v1/students/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let mut repo = StudentRepo::new(state.pool.clone());
    let student = repo
        .find_by_id(id, true)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id,
        }))?;
    repo.remove(&student).await?;
    tracing::info!(student_id = id, "Student deleted");
    Ok(StatusCode::NO_CONTENT)
}
