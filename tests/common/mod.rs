#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use blogdeck::blogdeck_auth::TokenService;
use blogdeck::blogdeck_config::CorsConfig;
use blogdeck::blogdeck_core::PasswordHasher;
use blogdeck::blogdeck_core::password::MIN_COST;
use blogdeck::router::init_router;
use blogdeck::state::AppState;
use chrono::Duration;
use fake::Fake;
use fake::faker::name::en::FirstName;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_SECRET: &[u8] = b"test_secret_key_for_testing_purposes";

pub fn test_tokens() -> TokenService {
    TokenService::new(TEST_SECRET, Duration::hours(1))
}

/// State on fresh in-memory stores with a cheap bcrypt cost.
pub fn test_state() -> AppState {
    AppState::in_memory(
        test_tokens(),
        PasswordHasher::new(MIN_COST),
        CorsConfig::from_list("http://localhost:3000"),
    )
}

pub fn setup_test_app() -> (Router, AppState) {
    let state = test_state();
    (init_router(state.clone()), state)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub bytes: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.bytes).unwrap()
    }
}

pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
    token: Option<&str>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    send_request(app, request).await
}

pub async fn send_request(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    TestResponse {
        status,
        bytes: bytes.to_vec(),
    }
}

pub async fn register(app: &Router, email: &str, password: &str) -> TestResponse {
    send(
        app,
        "POST",
        "/api/auth/register",
        Some(json!({ "email": email, "password": password })),
        None,
    )
    .await
}

pub async fn login(app: &Router, email: &str, password: &str) -> TestResponse {
    send(
        app,
        "POST",
        "/api/auth/login",
        Some(json!({ "email": email, "password": password })),
        None,
    )
    .await
}

/// Registers a fresh user and returns a token for it.
pub async fn registered_token(app: &Router) -> String {
    let email = generate_unique_email();
    register(app, &email, "testpass123").await;
    let response = login(app, &email, "testpass123").await;
    response.json()["token"].as_str().unwrap().to_string()
}

pub async fn create_post(app: &Router, title: &str, content: &str) -> Value {
    let response = send(
        app,
        "POST",
        "/api/posts",
        Some(json!({ "title": title, "content": content })),
        None,
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED);
    response.json()
}

pub fn generate_unique_email() -> String {
    let name: String = FirstName().fake();
    format!("{}-{}@test.com", name.to_lowercase(), Uuid::new_v4())
}
