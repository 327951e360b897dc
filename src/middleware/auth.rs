use anyhow::anyhow;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header, request::Parts},
    middleware::{self, Next},
    response::Response,
    routing::MethodRouter,
};

use blogdeck_auth::Claims;
use blogdeck_core::AppError;
use tracing::debug;

use crate::state::AppState;

/// Whether a route requires a verified bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
}

/// Wraps `route` in [`require_auth`] when `access` is [`Access::Authenticated`].
///
/// Routers declare access for every method router they register through
/// this function, so the protected surface can be read off the router
/// definitions directly.
pub fn with_access(
    route: MethodRouter<AppState>,
    access: Access,
    state: &AppState,
) -> MethodRouter<AppState> {
    match access {
        Access::Public => route,
        Access::Authenticated => {
            route.route_layer(middleware::from_fn_with_state(state.clone(), require_auth))
        }
    }
}

/// Returns the token from an `Authorization: Bearer <token>` header.
///
/// `None` when the header is absent, not valid UTF-8, uses another scheme, or
/// carries an empty token.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Verifies the bearer token and attaches [`AuthUser`] to the request.
///
/// Any failure ends the request with 403 before the handler runs. Only the
/// signature and expiry are checked; the subject is not looked up.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(req.headers())
        .ok_or_else(|| AppError::forbidden(anyhow!("Missing or malformed authorization header")))?;

    let claims = state.tokens.verify(token).map_err(AppError::forbidden)?;

    debug!(user_id = %claims.user_id, "Bearer token verified");
    req.extensions_mut().insert(AuthUser(claims));

    Ok(next.run(req).await)
}

/// Claims of the caller, available to handlers behind [`require_auth`].
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn user_id(&self) -> uuid::Uuid {
        self.0.user_id
    }

    pub fn email(&self) -> &str {
        &self.0.email
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or_else(|| AppError::forbidden(anyhow!("Route is not behind require_auth")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token_extracted() {
        let headers = headers_with("Bearer abc.def.ghi");
        assert_eq!(bearer_token(&headers), Some("abc.def.ghi"));
    }

    #[test]
    fn test_missing_header() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn test_wrong_scheme() {
        assert_eq!(bearer_token(&headers_with("Basic dXNlcjpwYXNz")), None);
        assert_eq!(bearer_token(&headers_with("Token abc")), None);
        assert_eq!(bearer_token(&headers_with("bearer abc")), None);
        assert_eq!(bearer_token(&headers_with("abc.def.ghi")), None);
    }

    #[test]
    fn test_empty_token() {
        assert_eq!(bearer_token(&headers_with("Bearer ")), None);
        assert_eq!(bearer_token(&headers_with("Bearer    ")), None);
    }

    #[test]
    fn test_auth_user_accessors() {
        let user_id = uuid::Uuid::new_v4();
        let auth_user = AuthUser(Claims {
            user_id,
            email: "test@example.com".to_string(),
            iat: 1234567800,
            exp: 9999999999,
        });

        assert_eq!(auth_user.user_id(), user_id);
        assert_eq!(auth_user.email(), "test@example.com");
    }
}
