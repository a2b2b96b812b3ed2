/// Integration tests for the Todostack API
///
/// These tests drive the full HTTP surface over the in-memory store:
/// - Todo CRUD with validation and not-found mapping
/// - Category association on single-item retrieval
/// - By-category listing
/// - User registration and credential login

mod common;

use axum::http::StatusCode;
use common::{json_request, request, response_json, TestContext};
use serde_json::json;

#[tokio::test]
async fn test_health_check() {
    let ctx = TestContext::new();

    let response = ctx.send(request("GET", "/health")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_create_todo_assigns_id() {
    let ctx = TestContext::new();

    let response = ctx
        .send(json_request(
            "POST",
            "/v1/todos",
            json!({ "title": "Water the plants" }),
        ))
        .await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert!(body["id"].is_i64());
    assert_eq!(body["title"], "Water the plants");
    assert_eq!(body["completed"], false);
}

#[tokio::test]
async fn test_create_todo_rejects_empty_title() {
    let ctx = TestContext::new();

    let response = ctx
        .send(json_request("POST", "/v1/todos", json!({ "title": "" })))
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = response_json(response).await;
    assert_eq!(body["error"], "todo_not_valid");
    assert!(!body["details"].as_array().unwrap().is_empty());

    // Nothing was persisted
    let list = response_json(ctx.send(request("GET", "/v1/todos")).await).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_get_todo_attaches_category_association() {
    let ctx = TestContext::new();

    // Category 42 has no record anywhere; the association alone is returned
    let created = response_json(
        ctx.send(json_request(
            "POST",
            "/v1/todos",
            json!({ "title": "Tagged", "category": { "id": 42 } }),
        ))
        .await,
    )
    .await;

    let id = created["id"].as_i64().unwrap();
    let response = ctx.send(request("GET", &format!("/v1/todos/{}", id))).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["category"]["id"], 42);
    assert!(body["category"].get("name").is_none());
}

#[tokio::test]
async fn test_get_unknown_todo_is_not_found() {
    let ctx = TestContext::new();

    let response = ctx.send(request("GET", "/v1/todos/9999")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response_json(response).await;
    assert_eq!(body["error"], "todo_not_found");
    assert!(body["message"].as_str().unwrap().contains("9999"));
}

#[tokio::test]
async fn test_list_todos_by_category() {
    let ctx = TestContext::new();

    ctx.send(json_request(
        "POST",
        "/v1/todos",
        json!({ "title": "In", "category": { "id": 7 } }),
    ))
    .await;
    ctx.send(json_request("POST", "/v1/todos", json!({ "title": "Out" })))
        .await;

    let matching = response_json(ctx.send(request("GET", "/v1/categories/7/todos")).await).await;
    assert_eq!(matching.as_array().unwrap().len(), 1);

    // An unknown category has no todos, not an error
    let empty = ctx.send(request("GET", "/v1/categories/999/todos")).await;
    assert_eq!(empty.status(), StatusCode::OK);
    assert!(response_json(empty).await.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_todo_is_idempotent() {
    let ctx = TestContext::new();

    let created = response_json(
        ctx.send(json_request(
            "POST",
            "/v1/todos",
            json!({ "title": "Gone soon" }),
        ))
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let first = ctx.send(request("DELETE", &format!("/v1/todos/{}", id))).await;
    assert_eq!(first.status(), StatusCode::NO_CONTENT);

    // Deleting again still succeeds
    let second = ctx.send(request("DELETE", &format!("/v1/todos/{}", id))).await;
    assert_eq!(second.status(), StatusCode::NO_CONTENT);

    let gone = ctx.send(request("GET", &format!("/v1/todos/{}", id))).await;
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_todo_via_save() {
    let ctx = TestContext::new();

    let created = response_json(
        ctx.send(json_request(
            "POST",
            "/v1/todos",
            json!({ "title": "Before" }),
        ))
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let updated = response_json(
        ctx.send(json_request(
            "POST",
            "/v1/todos",
            json!({ "id": id, "title": "After", "completed": true }),
        ))
        .await,
    )
    .await;

    assert_eq!(updated["id"], id);
    assert_eq!(updated["title"], "After");
    assert_eq!(updated["completed"], true);

    let list = response_json(ctx.send(request("GET", "/v1/todos")).await).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_user_registration_and_login() {
    let ctx = TestContext::new();

    let created = ctx
        .send(json_request(
            "POST",
            "/v1/users",
            json!({
                "email": "ada@example.com",
                "name": "Ada",
                "password": "correct horse battery"
            }),
        ))
        .await;
    assert_eq!(created.status(), StatusCode::OK);

    let body = response_json(created).await;
    assert!(body["id"].is_i64());
    // Credentials never come back
    assert!(body.get("password").is_none());

    let login = ctx
        .send(json_request(
            "POST",
            "/v1/auth/login",
            json!({ "email": "ada@example.com", "password": "correct horse battery" }),
        ))
        .await;
    assert_eq!(login.status(), StatusCode::OK);
    assert_eq!(response_json(login).await["email"], "ada@example.com");

    let wrong = ctx
        .send(json_request(
            "POST",
            "/v1/auth/login",
            json!({ "email": "ada@example.com", "password": "wrong password" }),
        ))
        .await;
    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);

    let unknown = ctx
        .send(json_request(
            "POST",
            "/v1/auth/login",
            json!({ "email": "nobody@example.com", "password": "whatever" }),
        ))
        .await;
    assert_eq!(unknown.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_user_validation_reports_every_violation() {
    let ctx = TestContext::new();

    let response = ctx
        .send(json_request(
            "POST",
            "/v1/users",
            json!({ "email": "not-an-email", "password": "short" }),
        ))
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = response_json(response).await;
    assert_eq!(body["error"], "user_not_valid");
    assert_eq!(body["details"].as_array().unwrap().len(), 2);
}
