mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{
    create_test_group, create_test_user, generate_unique_group_name, generate_unique_username,
    setup_test_app, token_for,
};
use http_body_util::BodyExt;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

#[sqlx::test(migrations = "./migrations")]
async fn test_list_groups_is_public_and_sorted(pool: PgPool) {
    create_test_group(&pool, "MATH-22").await;
    create_test_group(&pool, "COMSE-25").await;
    create_test_group(&pool, "EEAIR-24").await;

    let app = setup_test_app(pool.clone()).await;

    let request = Request::builder()
        .method("GET")
        .uri("/api/groups")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body, json!(["COMSE-25", "EEAIR-24", "MATH-22"]));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_group(pool: PgPool) {
    let admin = create_test_user(&pool, &generate_unique_username(), "adminpass", "admin").await;
    let app = setup_test_app(pool.clone()).await;

    let name = generate_unique_group_name();
    let request = Request::builder()
        .method("POST")
        .uri("/api/groups")
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", token_for(&admin)))
        .body(Body::from(
            serde_json::to_string(&json!({ "name": name })).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["name"], name);
    assert!(body["data"]["id"].is_number());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_group_requires_token(pool: PgPool) {
    let app = setup_test_app(pool.clone()).await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/groups")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({ "name": "COMSE-25" })).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_group_rejects_non_admin(pool: PgPool) {
    let teacher = create_test_user(&pool, &generate_unique_username(), "teachpass", "teacher").await;
    let app = setup_test_app(pool.clone()).await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/groups")
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", token_for(&teacher)))
        .body(Body::from(
            serde_json::to_string(&json!({ "name": "COMSE-25" })).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_duplicate_group(pool: PgPool) {
    let admin = create_test_user(&pool, &generate_unique_username(), "adminpass", "admin").await;
    create_test_group(&pool, "COMSE-25").await;
    let app = setup_test_app(pool.clone()).await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/groups")
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", token_for(&admin)))
        .body(Body::from(
            serde_json::to_string(&json!({ "name": "COMSE-25" })).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["error"], "Group already exists");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_group_empty_name(pool: PgPool) {
    let admin = create_test_user(&pool, &generate_unique_username(), "adminpass", "admin").await;
    let app = setup_test_app(pool.clone()).await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/groups")
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", token_for(&admin)))
        .body(Body::from(
            serde_json::to_string(&json!({ "name": "" })).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_group_cascades_to_schedules(pool: PgPool) {
    let admin = create_test_user(&pool, &generate_unique_username(), "adminpass", "admin").await;
    create_test_group(&pool, "COMSE-25").await;
    create_test_group(&pool, "MATH-22").await;

    sqlx::query(
        "INSERT INTO schedules (group_name, day, time, course) VALUES
         ('COMSE-25', 'Monday', '08:00', 'Data Structures'),
         ('COMSE-25', 'Tuesday', '09:30', 'Algorithms'),
         ('MATH-22', 'Monday', '08:00', 'Calculus')",
    )
    .execute(&pool)
    .await
    .unwrap();

    let app = setup_test_app(pool.clone()).await;

    let request = Request::builder()
        .method("DELETE")
        .uri("/api/groups/COMSE-25")
        .header("authorization", format!("Bearer {}", token_for(&admin)))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        body["message"],
        "Group and associated schedules deleted successfully"
    );

    let (remaining,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM schedules")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(remaining, 1);

    let (groups,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM groups WHERE name = 'COMSE-25'")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(groups, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_missing_group(pool: PgPool) {
    let admin = create_test_user(&pool, &generate_unique_username(), "adminpass", "admin").await;
    let app = setup_test_app(pool.clone()).await;

    let request = Request::builder()
        .method("DELETE")
        .uri("/api/groups/NOPE-00")
        .header("authorization", format!("Bearer {}", token_for(&admin)))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["error"], "Group not found");
}
