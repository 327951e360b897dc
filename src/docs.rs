use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::model::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use crate::modules::comments::model::{Comment, CreateCommentRequest, UpdateCommentRequest};
use crate::modules::common::{ErrorResponse, SuccessResponse};
use crate::modules::posts::model::{CreatePostRequest, Post, UpdatePostRequest};
use crate::modules::users::model::User;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register_user,
        crate::modules::auth::controller::login_user,
        crate::modules::users::controller::get_users,
        crate::modules::users::controller::get_user,
        crate::modules::users::controller::delete_user,
        crate::modules::posts::controller::list_posts,
        crate::modules::posts::controller::create_post,
        crate::modules::posts::controller::get_post,
        crate::modules::posts::controller::update_post,
        crate::modules::posts::controller::delete_post,
        crate::modules::comments::controller::add_comment,
        crate::modules::comments::controller::update_comment,
        crate::modules::comments::controller::delete_comment,
    ),
    components(
        schemas(
            User,
            LoginRequest,
            LoginResponse,
            RegisterRequest,
            RegisterResponse,
            Post,
            CreatePostRequest,
            UpdatePostRequest,
            Comment,
            CreateCommentRequest,
            UpdateCommentRequest,
            ErrorResponse,
            SuccessResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration and login"),
        (name = "Users", description = "User account endpoints"),
        (name = "Posts", description = "Post endpoints"),
        (name = "Comments", description = "Comments embedded in a post")
    ),
    info(
        title = "Blogdeck API",
        version = "0.1.0",
        description = "A small blog backend built with Rust, Axum, and PostgreSQL with bearer-token authentication.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
