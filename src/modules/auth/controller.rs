use anyhow::anyhow;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::instrument;

use blogdeck_core::AppError;

use super::model::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use super::service::AuthService;
use crate::modules::common::ErrorResponse;
use crate::state::AppState;
use crate::validator::{MISSING_FIELDS, ValidatedJson};

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered successfully", body = RegisterResponse),
        (status = 400, description = "Bad request - missing email or password", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    let credentials = dto
        .into_credentials()
        .ok_or_else(|| AppError::bad_request(anyhow!(MISSING_FIELDS)))?;

    let response =
        AuthService::register_user(state.users.as_ref(), &state.hasher, credentials).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Login and receive a bearer token
///
/// Every failure, including a malformed body, returns the same
/// "Invalid email or password" response.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Invalid email or password", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn login_user(
    State(state): State<AppState>,
    payload: Result<ValidatedJson<LoginRequest>, AppError>,
) -> Result<Json<LoginResponse>, AppError> {
    let credentials = payload
        .ok()
        .and_then(|ValidatedJson(dto)| dto.into_credentials())
        .ok_or_else(AppError::invalid_credentials)?;

    let response = AuthService::login_user(
        state.users.as_ref(),
        &state.hasher,
        &state.tokens,
        credentials,
    )
    .await?;
    Ok(Json(response))
}
