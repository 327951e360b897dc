use anyhow::anyhow;
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use tracing::instrument;

use blogdeck_core::AppError;
use blogdeck_db::PostFilter;
use blogdeck_models::PostId;

use super::model::{CreatePostRequest, Post, PostSearchParams, UpdatePostRequest};
use super::service::PostService;
use crate::middleware::auth::AuthUser;
use crate::modules::common::{ErrorResponse, SuccessResponse, parse_id};
use crate::state::AppState;
use crate::validator::{MISSING_FIELDS, ValidatedJson};

/// List posts, optionally filtered by a search term
#[utoipa::path(
    get,
    path = "/api/posts",
    params(PostSearchParams),
    responses(
        (status = 200, description = "List of posts, newest first", body = Vec<Post>),
        (status = 403, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Posts",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user), fields(user_id = %auth_user.user_id()))]
pub async fn list_posts(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(params): Query<PostSearchParams>,
) -> Result<Json<Vec<Post>>, AppError> {
    let filter = params.search.map(PostFilter::search).unwrap_or_default();
    let posts = PostService::list_posts(state.posts.as_ref(), filter).await?;
    Ok(Json(posts))
}

/// Create a post
#[utoipa::path(
    post,
    path = "/api/posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created", body = Post),
        (status = 400, description = "Missing title or content", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Posts"
)]
#[instrument(skip_all)]
pub async fn create_post(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreatePostRequest>,
) -> Result<(StatusCode, Json<Post>), AppError> {
    let new_post = dto
        .into_new_post()
        .ok_or_else(|| AppError::bad_request(anyhow!(MISSING_FIELDS)))?;

    let post = PostService::create_post(state.posts.as_ref(), new_post).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// Get a post by ID
#[utoipa::path(
    get,
    path = "/api/posts/{id}",
    params(("id" = String, Path, description = "Post ID")),
    responses(
        (status = 200, description = "Post found", body = Post),
        (status = 404, description = "Post not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Posts"
)]
#[instrument(skip(state))]
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Post>, AppError> {
    let id: PostId = parse_id(&id, "Post")?;
    let post = PostService::get_post(state.posts.as_ref(), id).await?;
    Ok(Json(post))
}

/// Update a post
#[utoipa::path(
    put,
    path = "/api/posts/{id}",
    params(("id" = String, Path, description = "Post ID")),
    request_body = UpdatePostRequest,
    responses(
        (status = 200, description = "Post updated", body = Post),
        (status = 400, description = "No fields to update", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Posts"
)]
#[instrument(skip(state))]
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(dto): ValidatedJson<UpdatePostRequest>,
) -> Result<Json<Post>, AppError> {
    let id: PostId = parse_id(&id, "Post")?;
    let post = PostService::update_post(state.posts.as_ref(), id, dto.into()).await?;
    Ok(Json(post))
}

/// Delete a post and its comments
#[utoipa::path(
    delete,
    path = "/api/posts/{id}",
    params(("id" = String, Path, description = "Post ID")),
    responses(
        (status = 200, description = "Post deleted", body = SuccessResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Posts"
)]
#[instrument(skip(state))]
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, AppError> {
    let id: PostId = parse_id(&id, "Post")?;
    PostService::delete_post(state.posts.as_ref(), id).await?;
    Ok(Json(SuccessResponse::ok()))
}
