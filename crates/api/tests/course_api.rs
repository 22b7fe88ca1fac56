//! HTTP-level integration tests for the `/courses` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_course_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/courses",
        serde_json::json!({"name": "Algebra"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let id = json["data"]["id"].as_i64().unwrap();
    assert!(id > 0);
    assert_eq!(json["data"]["name"], "Algebra");

    let app = common::build_test_app(pool);
    let fetched = body_json(get(app, &format!("/api/v1/courses/{id}")).await).await;
    assert_eq!(fetched["data"]["name"], "Algebra");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_course_with_explicit_date(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/courses",
        serde_json::json!({"name": "History", "date_created": "2024-02-01T12:00:00Z"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["date_created"], "2024-02-01T12:00:00Z");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_course_name_returns_409(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/courses", serde_json::json!({"name": "Math "})).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // Case- and whitespace-variant of the same name.
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/courses", serde_json::json!({"name": "math"})).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "DUPLICATE_KEY");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_blank_course_name_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/courses", serde_json::json!({"name": "  "})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_nonexistent_course_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/api/v1/courses/5",
        serde_json::json!({"id": 5, "name": "Ghost", "date_created": "2024-02-01T12:00:00Z"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_course(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(app, "/api/v1/courses", serde_json::json!({"name": "Algebra"})).await,
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let mut update = created["data"].clone();
    update["name"] = serde_json::json!("Linear Algebra");

    let app = common::build_test_app(pool);
    let response = put_json(app, &format!("/api/v1/courses/{id}"), update).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Linear Algebra");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_course(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(app, "/api/v1/courses", serde_json::json!({"name": "Algebra"})).await,
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/courses/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/courses/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_courses(pool: PgPool) {
    for name in ["Algebra", "Biology"] {
        let app = common::build_test_app(pool.clone());
        post_json(app, "/api/v1/courses", serde_json::json!({"name": name})).await;
    }

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/courses").await).await;
    let names: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Algebra", "Biology"]);
}
