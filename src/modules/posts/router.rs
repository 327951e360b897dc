use axum::{
    Router,
    routing::{get, post},
};

use super::controller::{create_post, delete_post, get_post, list_posts, update_post};
use crate::middleware::auth::{Access, with_access};
use crate::modules::comments::router::init_comments_router;
use crate::state::AppState;

pub fn init_posts_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            with_access(get(list_posts), Access::Authenticated, state)
                .merge(with_access(post(create_post), Access::Public, state)),
        )
        .route(
            "/{id}",
            with_access(
                get(get_post).put(update_post).delete(delete_post),
                Access::Public,
                state,
            ),
        )
        .merge(init_comments_router(state))
}
