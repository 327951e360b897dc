use axum::{Router, routing::post};

use super::controller::{login_user, register_user};
use crate::middleware::auth::{Access, with_access};
use crate::state::AppState;

pub fn init_auth_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/register",
            with_access(post(register_user), Access::Public, state),
        )
        .route("/login", with_access(post(login_user), Access::Public, state))
}
