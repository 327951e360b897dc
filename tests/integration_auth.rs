mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{TestResponse, generate_unique_email, login, register, send_request, setup_test_app};
use serde_json::json;

#[tokio::test]
async fn test_register_success() {
    let (app, state) = setup_test_app();
    let email = generate_unique_email();

    let response = register(&app, &email, "testpass123").await;

    assert_eq!(response.status, StatusCode::CREATED);
    let body = response.json();
    assert_eq!(body["success"], true);
    assert!(body["user_id"].is_string());

    let stored = state.users.find_by_email(&email).await.unwrap().unwrap();
    assert_eq!(stored.id.to_string(), body["user_id"].as_str().unwrap());
    assert_ne!(stored.password_hash, "testpass123");
    assert!(stored.password_hash.starts_with("$2"));
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let (app, _) = setup_test_app();
    let email = generate_unique_email();

    register(&app, &email, "testpass123").await;
    let response = register(&app, &email, "otherpass").await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.json(), json!({ "error": "Email already registered" }));
}

#[tokio::test]
async fn test_register_missing_fields() {
    let (app, _) = setup_test_app();

    for body in [
        json!({ "email": "a@test.com" }),
        json!({ "password": "testpass123" }),
        json!({ "email": "", "password": "testpass123" }),
        json!({}),
    ] {
        let response = common::send(&app, "POST", "/api/auth/register", Some(body), None).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.json(), json!({ "error": "Missing required fields" }));
    }
}

#[tokio::test]
async fn test_login_success() {
    let (app, state) = setup_test_app();
    let email = generate_unique_email();

    let registered = register(&app, &email, "testpass123").await.json();
    let response = login(&app, &email, "testpass123").await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["success"], true);

    let claims = state.tokens.verify(body["token"].as_str().unwrap()).unwrap();
    assert_eq!(claims.email, email);
    assert_eq!(claims.user_id.to_string(), registered["user_id"].as_str().unwrap());
    assert_eq!(claims.exp - claims.iat, 3600);
}

#[tokio::test]
async fn test_login_wrong_password() {
    let (app, _) = setup_test_app();
    let email = generate_unique_email();
    register(&app, &email, "testpass123").await;

    let response = login(&app, &email, "wrongpass").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json(), json!({ "error": "Invalid email or password" }));
}

#[tokio::test]
async fn test_login_unknown_email_indistinguishable_from_wrong_password() {
    let (app, _) = setup_test_app();
    let email = generate_unique_email();
    register(&app, &email, "testpass123").await;

    let wrong_password = login(&app, &email, "wrongpass").await;
    let unknown_email = login(&app, &generate_unique_email(), "testpass123").await;

    assert_eq!(wrong_password.status, unknown_email.status);
    assert_eq!(wrong_password.bytes, unknown_email.bytes);
}

#[tokio::test]
async fn test_login_unknown_email_spends_a_bcrypt_verification() {
    let (app, state) = setup_test_app();
    assert!(state.hasher.dummy_hash().is_none());

    let response = login(&app, &generate_unique_email(), "testpass123").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(state.hasher.dummy_hash().is_some());
}

#[tokio::test]
async fn test_login_missing_fields_gives_generic_error() {
    let (app, _) = setup_test_app();
    let generic = login(&app, &generate_unique_email(), "testpass123").await;

    let missing_password = common::send(
        &app,
        "POST",
        "/api/auth/login",
        Some(json!({ "email": "a@test.com" })),
        None,
    )
    .await;

    assert_eq!(missing_password.status, StatusCode::BAD_REQUEST);
    assert_eq!(missing_password.bytes, generic.bytes);
}

#[tokio::test]
async fn test_login_malformed_body_gives_generic_error() {
    let (app, _) = setup_test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response: TestResponse = send_request(&app, request).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json(), json!({ "error": "Invalid email or password" }));
}

#[tokio::test]
async fn test_register_then_login_flow() {
    let (app, _) = setup_test_app();
    let email = generate_unique_email();

    assert_eq!(register(&app, &email, "pw1").await.status, StatusCode::CREATED);
    assert_eq!(login(&app, &email, "pw1").await.status, StatusCode::OK);
    assert_eq!(login(&app, &email, "pw2").await.status, StatusCode::BAD_REQUEST);
}
