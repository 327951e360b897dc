use axum::{
    Router,
    routing::{post, put},
};

use super::controller::{add_comment, delete_comment, update_comment};
use crate::middleware::auth::{Access, with_access};
use crate::state::AppState;

/// Comment routes, nested under a post path.
pub fn init_comments_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/{id}/comments",
            with_access(post(add_comment), Access::Public, state),
        )
        .route(
            "/{id}/comments/{comment_id}",
            with_access(
                put(update_comment).delete(delete_comment),
                Access::Public,
                state,
            ),
        )
}
