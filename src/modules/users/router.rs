use axum::{Router, routing::get};

use super::controller::{delete_user, get_user, get_users};
use crate::middleware::auth::{Access, with_access};
use crate::state::AppState;

pub fn init_users_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/", with_access(get(get_users), Access::Public, state))
        .route(
            "/{id}",
            with_access(get(get_user).delete(delete_user), Access::Public, state),
        )
}
