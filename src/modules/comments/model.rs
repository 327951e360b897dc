use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use blogdeck_models::CommentUpdate;

pub use blogdeck_models::Comment;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCommentRequest {
    #[validate(required, length(min = 1))]
    pub author: Option<String>,
    #[validate(required, length(min = 1))]
    pub body: Option<String>,
}

impl CreateCommentRequest {
    pub fn into_comment(self) -> Option<Comment> {
        let author = self.author.filter(|a| !a.is_empty())?;
        let body = self.body.filter(|b| !b.is_empty())?;
        Some(Comment::new(author, body))
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCommentRequest {
    #[validate(length(min = 1))]
    pub author: Option<String>,
    #[validate(length(min = 1))]
    pub body: Option<String>,
}

impl From<UpdateCommentRequest> for CommentUpdate {
    fn from(dto: UpdateCommentRequest) -> Self {
        Self {
            author: dto.author,
            body: dto.body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_comment_requires_author_and_body() {
        let request = CreateCommentRequest {
            author: None,
            body: Some("Nice post".to_string()),
        };
        assert!(request.validate().is_err());
        assert!(request.into_comment().is_none());
    }

    #[test]
    fn test_into_comment_assigns_fresh_id() {
        let first = CreateCommentRequest {
            author: Some("ann".to_string()),
            body: Some("one".to_string()),
        }
        .into_comment()
        .unwrap();
        let second = CreateCommentRequest {
            author: Some("ann".to_string()),
            body: Some("one".to_string()),
        }
        .into_comment()
        .unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(first.body, "one");
    }
}
