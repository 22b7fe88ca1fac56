//! Cross-cutting error handling: unknown routes, malformed identifiers,
//! and error body shape.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_route_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/teachers").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_numeric_id_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/students/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_error_body_has_code_and_message(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/courses/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert!(json["error"].as_str().unwrap().contains("Course"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_required_field_rejected(pool: PgPool) {
    // `name` absent entirely: rejected at deserialization.
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/courses", serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
