use anyhow::anyhow;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::instrument;

use blogdeck_core::AppError;
use blogdeck_models::{CommentId, PostId};

use super::model::{Comment, CreateCommentRequest, UpdateCommentRequest};
use super::service::CommentService;
use crate::modules::common::{ErrorResponse, SuccessResponse, parse_id};
use crate::state::AppState;
use crate::validator::{MISSING_FIELDS, ValidatedJson};

fn parse_ids(id: &str, comment_id: &str) -> Result<(PostId, CommentId), AppError> {
    Ok((parse_id(id, "Post")?, parse_id(comment_id, "Comment")?))
}

/// Add a comment to a post
#[utoipa::path(
    post,
    path = "/api/posts/{id}/comments",
    params(("id" = String, Path, description = "Post ID")),
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Comment added", body = Comment),
        (status = 400, description = "Missing author or body", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Comments"
)]
#[instrument(skip(state))]
pub async fn add_comment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(dto): ValidatedJson<CreateCommentRequest>,
) -> Result<(StatusCode, Json<Comment>), AppError> {
    let post_id: PostId = parse_id(&id, "Post")?;
    let comment = dto
        .into_comment()
        .ok_or_else(|| AppError::bad_request(anyhow!(MISSING_FIELDS)))?;

    let comment = CommentService::add_comment(state.posts.as_ref(), post_id, comment).await?;
    Ok((StatusCode::CREATED, Json(comment)))
}

/// Update a comment
#[utoipa::path(
    put,
    path = "/api/posts/{id}/comments/{comment_id}",
    params(
        ("id" = String, Path, description = "Post ID"),
        ("comment_id" = String, Path, description = "Comment ID")
    ),
    request_body = UpdateCommentRequest,
    responses(
        (status = 200, description = "Comment updated", body = Comment),
        (status = 400, description = "No fields to update", body = ErrorResponse),
        (status = 404, description = "Post or comment not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Comments"
)]
#[instrument(skip(state))]
pub async fn update_comment(
    State(state): State<AppState>,
    Path((id, comment_id)): Path<(String, String)>,
    ValidatedJson(dto): ValidatedJson<UpdateCommentRequest>,
) -> Result<Json<Comment>, AppError> {
    let (post_id, comment_id) = parse_ids(&id, &comment_id)?;
    let comment =
        CommentService::update_comment(state.posts.as_ref(), post_id, comment_id, dto.into())
            .await?;
    Ok(Json(comment))
}

/// Delete a comment
#[utoipa::path(
    delete,
    path = "/api/posts/{id}/comments/{comment_id}",
    params(
        ("id" = String, Path, description = "Post ID"),
        ("comment_id" = String, Path, description = "Comment ID")
    ),
    responses(
        (status = 200, description = "Comment deleted", body = SuccessResponse),
        (status = 404, description = "Post or comment not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Comments"
)]
#[instrument(skip(state))]
pub async fn delete_comment(
    State(state): State<AppState>,
    Path((id, comment_id)): Path<(String, String)>,
) -> Result<Json<SuccessResponse>, AppError> {
    let (post_id, comment_id) = parse_ids(&id, &comment_id)?;
    CommentService::delete_comment(state.posts.as_ref(), post_id, comment_id).await?;
    Ok(Json(SuccessResponse::ok()))
}
