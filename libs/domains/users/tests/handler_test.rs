//! Handler tests for the users domain
//!
//! These tests verify that the HTTP handlers work correctly:
//! - Request deserialization (JSON → Rust structs)
//! - Response serialization (Rust structs → JSON)
//! - HTTP status codes
//! - Error responses
//!
//! Unlike E2E tests, these test ONLY the users domain router,
//! not the full application with docs, CORS middleware, etc.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_users::{handlers, InMemoryUserRepository, UserService};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt; // For oneshot()
use uuid::Uuid;

fn app() -> axum::Router {
    let repository = InMemoryUserRepository::new();
    let service = UserService::new(repository);
    handlers::router(service)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

// Helper to parse JSON response body
async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn create_user(app: &axum::Router, email: &str, password: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/",
            json!({ "email": email, "password": password }),
        ))
        .await
        .unwrap();

    let status = response.status();
    let body = json_body(response.into_body()).await;
    (status, body)
}

#[tokio::test]
async fn test_create_user_returns_201_with_id() {
    let app = app();

    let (status, body) = create_user(&app, "a@x.com", "p").await;

    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].as_str().unwrap();
    assert!(Uuid::parse_str(id).is_ok());
}

#[tokio::test]
async fn test_create_user_missing_fields_returns_400() {
    let app = app();

    let response = app
        .clone()
        .oneshot(json_request("POST", "/", json!({ "email": "a@x.com" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert!(body["error"].as_str().unwrap().contains("email and password"));

    // empty-string fields count as missing too
    let response = app
        .oneshot(json_request(
            "POST",
            "/",
            json!({ "email": "a@x.com", "password": "" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_duplicate_email_returns_400() {
    let app = app();

    let (status, _) = create_user(&app, "a@x.com", "p").await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = create_user(&app, "a@x.com", "q").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("already exists"));
}

#[tokio::test]
async fn test_list_users_in_insertion_order() {
    let app = app();
    create_user(&app, "a@x.com", "p").await;
    create_user(&app, "b@x.com", "p").await;

    let response = app.oneshot(empty_request("GET", "/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["email"], "a@x.com");
    assert_eq!(users[1]["email"], "b@x.com");
    // password must never leave the API
    assert!(users[0].get("password").is_none());
}

#[tokio::test]
async fn test_get_user_returns_record_without_password() {
    let app = app();
    let (_, created) = create_user(&app, "a@x.com", "p").await;
    let id = created["id"].as_str().unwrap();

    let response = app
        .oneshot(empty_request("GET", &format!("/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["id"], *id);
    assert_eq!(body["email"], "a@x.com");
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn test_get_unknown_user_returns_404() {
    let app = app();

    let response = app
        .oneshot(empty_request("GET", &format!("/{}", Uuid::now_v7())))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_malformed_id_returns_400() {
    let app = app();

    let response = app
        .oneshot(empty_request("GET", "/not-a-uuid"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_put_with_same_email_returns_200_message() {
    let app = app();
    let (_, created) = create_user(&app, "a@x.com", "p").await;
    let id = created["id"].as_str().unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/{}", id),
            json!({ "email": "a@x.com", "password": "q", "firstName": "Jo" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert!(body["message"].as_str().unwrap().contains("updated via put"));

    let response = app
        .oneshot(empty_request("GET", &format!("/{}", id)))
        .await
        .unwrap();
    let body = json_body(response.into_body()).await;
    assert_eq!(body["firstName"], "Jo");
}

#[tokio::test]
async fn test_put_with_different_email_returns_400() {
    let app = app();
    let (_, created) = create_user(&app, "a@x.com", "p").await;
    let id = created["id"].as_str().unwrap();

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/{}", id),
            json!({ "email": "b@x.com", "password": "p" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "Invalid email");
}

#[tokio::test]
async fn test_put_unknown_id_returns_404() {
    let app = app();

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/{}", Uuid::now_v7()),
            json!({ "email": "a@x.com", "password": "p" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_patch_unknown_id_returns_404() {
    let app = app();

    let response = app
        .oneshot(json_request(
            "PATCH",
            &format!("/{}", Uuid::now_v7()),
            json!({ "firstName": "Jo" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_unknown_id_returns_404() {
    let app = app();

    let response = app
        .oneshot(empty_request("DELETE", &format!("/{}", Uuid::now_v7())))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_full_user_lifecycle() {
    let app = app();

    // create a@x.com -> 201 with id
    let (status, created) = create_user(&app, "a@x.com", "p").await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap().to_string();

    // read it back -> 200 with the email
    let response = app
        .clone()
        .oneshot(empty_request("GET", &format!("/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["email"], "a@x.com");

    // second create with the same email -> 400 duplicate
    let (status, _) = create_user(&app, "a@x.com", "q").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // patch firstName -> 200, visible on read, email unchanged
    let response = app
        .clone()
        .oneshot(json_request(
            "PATCH",
            &format!("/{}", id),
            json!({ "firstName": "Jo" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(empty_request("GET", &format!("/{}", id)))
        .await
        .unwrap();
    let body = json_body(response.into_body()).await;
    assert_eq!(body["firstName"], "Jo");
    assert_eq!(body["email"], "a@x.com");

    // delete -> 200 with message
    let response = app
        .clone()
        .oneshot(empty_request("DELETE", &format!("/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert!(body["message"].as_str().unwrap().contains("removed"));

    // gone -> 404
    let response = app
        .oneshot(empty_request("GET", &format!("/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
