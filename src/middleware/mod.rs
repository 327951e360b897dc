//! Request middleware.
//!
//! - [`auth`]: bearer token verification and per-route access control
//!
//! # Authentication Flow
//!
//! 1. A router registers a route with [`auth::with_access`] and
//!    [`auth::Access::Authenticated`]
//! 2. [`auth::require_auth`] reads `Authorization: Bearer <token>` and verifies it
//! 3. On success the claims are inserted as [`auth::AuthUser`]; on failure the
//!    request ends with 403 and the handler never runs
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::auth::{Access, AuthUser, with_access};
//!
//! Router::new().route("/", with_access(get(list_posts), Access::Authenticated, &state));
//!
//! async fn list_posts(auth_user: AuthUser) -> impl IntoResponse {
//!     // auth_user.user_id() is the verified subject
//! }
//! ```

pub mod auth;
