use std::str::FromStr;

use anyhow::anyhow;
use serde::Serialize;
use utoipa::ToSchema;

use blogdeck_core::AppError;

/// Body of every error response.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Parses a path segment into an ID. A malformed ID cannot name an existing
/// document, so it is reported as `"<what> not found"`.
pub fn parse_id<T: FromStr>(raw: &str, what: &str) -> Result<T, AppError> {
    raw.parse()
        .map_err(|_| AppError::not_found(anyhow!("{} not found", what)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use blogdeck_core::ErrorKind;
    use blogdeck_models::PostId;

    #[test]
    fn test_parse_id() {
        let id = PostId::new();
        let parsed: PostId = parse_id(&id.to_string(), "Post").unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_parse_malformed_id_is_not_found() {
        let err = parse_id::<PostId>("42", "Post").unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert_eq!(err.client_message(), "Post not found");
    }
}
