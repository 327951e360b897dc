mod common;

use axum::http::StatusCode;
use common::{generate_unique_email, register, send, setup_test_app};
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn test_get_users_never_exposes_password_hash() {
    let (app, _) = setup_test_app();
    register(&app, &generate_unique_email(), "testpass123").await;
    register(&app, &generate_unique_email(), "testpass123").await;

    let response = send(&app, "GET", "/api/users", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    let users = response.json();
    assert_eq!(users.as_array().unwrap().len(), 2);
    for user in users.as_array().unwrap() {
        assert!(user.get("password_hash").is_none());
        assert!(user.get("password").is_none());
        assert!(user["email"].is_string());
    }
    assert!(!String::from_utf8_lossy(&response.bytes).contains("$2"));
}

#[tokio::test]
async fn test_get_user_by_id() {
    let (app, _) = setup_test_app();
    let email = generate_unique_email();
    let user_id = register(&app, &email, "testpass123").await.json()["user_id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = send(&app, "GET", &format!("/api/users/{}", user_id), None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["id"], user_id);
    assert_eq!(body["email"], email);
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_get_user_not_found() {
    let (app, _) = setup_test_app();

    let unknown = send(&app, "GET", &format!("/api/users/{}", Uuid::new_v4()), None, None).await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);
    assert_eq!(unknown.json(), json!({ "error": "User not found" }));

    let malformed = send(&app, "GET", "/api/users/not-a-uuid", None, None).await;
    assert_eq!(malformed.status, StatusCode::NOT_FOUND);
    assert_eq!(malformed.bytes, unknown.bytes);
}

#[tokio::test]
async fn test_delete_user() {
    let (app, state) = setup_test_app();
    let email = generate_unique_email();
    let user_id = register(&app, &email, "testpass123").await.json()["user_id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = send(&app, "DELETE", &format!("/api/users/{}", user_id), None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!({ "success": true }));
    assert!(state.users.find_by_email(&email).await.unwrap().is_none());

    let again = send(&app, "DELETE", &format!("/api/users/{}", user_id), None, None).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}
