use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use blogdeck_models::{NewPost, PostUpdate};

pub use blogdeck_models::Post;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePostRequest {
    #[validate(required, length(min = 1))]
    pub title: Option<String>,
    #[validate(required, length(min = 1))]
    pub content: Option<String>,
    pub author: Option<String>,
}

impl CreatePostRequest {
    /// `None` unless both title and content are present.
    pub fn into_new_post(self) -> Option<NewPost> {
        Some(NewPost {
            title: self.title.filter(|t| !t.is_empty())?,
            content: self.content.filter(|c| !c.is_empty())?,
            author: self.author,
        })
    }
}

/// Partial update; absent fields are left unchanged.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdatePostRequest {
    #[validate(length(min = 1))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub content: Option<String>,
    pub author: Option<String>,
}

impl From<UpdatePostRequest> for PostUpdate {
    fn from(dto: UpdatePostRequest) -> Self {
        Self {
            title: dto.title,
            content: dto.content,
            author: dto.author,
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PostSearchParams {
    /// Case-insensitive literal substring matched against title and content
    pub search: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_requires_title_and_content() {
        let request = CreatePostRequest {
            title: Some("Hello".to_string()),
            content: None,
            author: None,
        };
        assert!(request.validate().is_err());
        assert!(request.into_new_post().is_none());
    }

    #[test]
    fn test_create_request_into_new_post() {
        let request = CreatePostRequest {
            title: Some("Hello".to_string()),
            content: Some("World".to_string()),
            author: Some("ann".to_string()),
        };
        assert!(request.validate().is_ok());

        let post = request.into_new_post().unwrap();
        assert_eq!(post.title, "Hello");
        assert_eq!(post.author.as_deref(), Some("ann"));
    }

    #[test]
    fn test_update_request_rejects_empty_title() {
        let request = UpdatePostRequest {
            title: Some(String::new()),
            content: None,
            author: None,
        };
        assert!(request.validate().is_err());
    }
}
