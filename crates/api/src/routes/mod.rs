pub mod course;
pub mod health;
pub mod student;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /students            GET list, POST create
/// /students/{id}       GET, PUT, DELETE
/// /courses             GET list, POST create
/// /courses/{id}        GET, PUT, DELETE
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/students", student::router())
        .nest("/courses", course::router())
}
