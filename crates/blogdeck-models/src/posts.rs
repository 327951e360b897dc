//! Post and comment domain models.
//!
//! Comments have no table of their own: they live as an ordered array inside
//! their post and are serialized as JSON, so the `Serialize`/`Deserialize`
//! shape of [`Comment`] is also its storage format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::ids::{CommentId, PostId};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub author: Option<String>,
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn comment(&self, id: CommentId) -> Option<&Comment> {
        self.comments.iter().find(|c| c.id == id)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Comment {
    pub id: CommentId,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(author: String, body: String) -> Self {
        Self {
            id: CommentId::new(),
            author,
            body,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: Option<String>,
}

impl NewPost {
    pub fn into_post(self) -> Post {
        let now = Utc::now();
        Post {
            id: PostId::new(),
            title: self.title,
            content: self.content,
            author: self.author,
            comments: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Fields to overwrite on a post. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

impl PostUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.author.is_none()
    }

    /// Applies the update and reports whether any field changed.
    pub fn apply(&self, post: &mut Post) -> bool {
        let mut changed = false;

        if let Some(title) = &self.title {
            changed |= post.title != *title;
            post.title = title.clone();
        }
        if let Some(content) = &self.content {
            changed |= post.content != *content;
            post.content = content.clone();
        }
        if let Some(author) = &self.author {
            changed |= post.author.as_deref() != Some(author.as_str());
            post.author = Some(author.clone());
        }

        changed
    }
}

/// Fields to overwrite on a comment. `None` leaves a field untouched.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl CommentUpdate {
    pub fn is_empty(&self) -> bool {
        self.author.is_none() && self.body.is_none()
    }

    pub fn apply(&self, comment: &mut Comment) -> bool {
        let mut changed = false;

        if let Some(author) = &self.author {
            changed |= comment.author != *author;
            comment.author = author.clone();
        }
        if let Some(body) = &self.body {
            changed |= comment.body != *body;
            comment.body = body.clone();
        }

        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post() -> Post {
        NewPost {
            title: "Hello".to_string(),
            content: "First post".to_string(),
            author: None,
        }
        .into_post()
    }

    #[test]
    fn test_new_post_has_no_comments() {
        let post = sample_post();
        assert!(post.comments.is_empty());
        assert_eq!(post.created_at, post.updated_at);
    }

    #[test]
    fn test_post_update_apply() {
        let mut post = sample_post();
        let update = PostUpdate {
            title: Some("Changed".to_string()),
            ..Default::default()
        };

        assert!(update.apply(&mut post));
        assert_eq!(post.title, "Changed");
        assert_eq!(post.content, "First post");

        // Same value again is not a modification
        assert!(!update.apply(&mut post));
    }

    #[test]
    fn test_empty_updates() {
        assert!(PostUpdate::default().is_empty());
        assert!(CommentUpdate::default().is_empty());
    }

    #[test]
    fn test_comment_update_serializes_only_present_fields() {
        let update = CommentUpdate {
            author: None,
            body: Some("edited".to_string()),
        };
        assert_eq!(serde_json::to_string(&update).unwrap(), r#"{"body":"edited"}"#);
    }

    #[test]
    fn test_find_comment() {
        let mut post = sample_post();
        let comment = Comment::new("ann".to_string(), "nice".to_string());
        let id = comment.id;
        post.comments.push(comment);

        assert_eq!(post.comment(id).map(|c| c.body.as_str()), Some("nice"));
        assert!(post.comment(CommentId::new()).is_none());
    }
}
