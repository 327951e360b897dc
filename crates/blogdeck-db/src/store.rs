//! Store traits consumed by the request handlers.
//!
//! Each method is a single point operation: one lookup, one insert, one
//! update or one delete. Operations are atomic on their own; nothing here
//! spans several documents, and a post's embedded comments are changed
//! through the post itself.

use std::fmt;

use async_trait::async_trait;

use blogdeck_models::{
    Comment, CommentId, CommentUpdate, NewPost, NewUser, Post, PostId, PostUpdate, UserId,
    UserRecord,
};

use crate::error::StoreError;

/// Outcome of an update: how many documents matched the filter and how many
/// were actually changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateResult {
    pub matched_count: u64,
    pub modified_count: u64,
}

impl UpdateResult {
    pub fn matched(&self) -> bool {
        self.matched_count > 0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeleteResult {
    pub deleted_count: u64,
}

impl DeleteResult {
    pub fn deleted(&self) -> bool {
        self.deleted_count > 0
    }
}

/// Filter for listing posts.
///
/// `search` is matched literally and case-insensitively against title and
/// content. Wildcard characters in the term carry no special meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFilter {
    pub search: Option<String>,
}

impl PostFilter {
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: Some(term.into()),
        }
    }

    /// The search term, ignoring blank input.
    pub fn term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }

    /// `ILIKE` pattern for the search term, with `%`, `_` and `\` escaped.
    pub fn like_pattern(&self) -> Option<String> {
        self.term().map(|term| format!("%{}%", escape_like(term)))
    }

    pub fn matches(&self, post: &Post) -> bool {
        match self.term() {
            None => true,
            Some(term) => {
                let needle = term.to_lowercase();
                post.title.to_lowercase().contains(&needle)
                    || post.content.to_lowercase().contains(&needle)
            }
        }
    }
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[async_trait]
pub trait UserStore: Send + Sync + fmt::Debug {
    /// Fails with [`StoreError::DuplicateEmail`] if the email is taken.
    async fn insert_one(&self, user: NewUser) -> Result<UserRecord, StoreError>;

    /// Exact, case-sensitive match on the stored email.
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError>;

    async fn find_by_id(&self, id: UserId) -> Result<Option<UserRecord>, StoreError>;

    /// All users, oldest first.
    async fn find_all(&self) -> Result<Vec<UserRecord>, StoreError>;

    async fn delete_one(&self, id: UserId) -> Result<DeleteResult, StoreError>;
}

#[async_trait]
pub trait PostStore: Send + Sync + fmt::Debug {
    /// Posts matching `filter`, newest first.
    async fn find(&self, filter: &PostFilter) -> Result<Vec<Post>, StoreError>;

    async fn find_one(&self, id: PostId) -> Result<Option<Post>, StoreError>;

    async fn insert_one(&self, post: NewPost) -> Result<Post, StoreError>;

    async fn update_one(&self, id: PostId, update: &PostUpdate)
    -> Result<UpdateResult, StoreError>;

    async fn delete_one(&self, id: PostId) -> Result<DeleteResult, StoreError>;

    /// Appends a comment to the post's comment array.
    async fn push_comment(
        &self,
        post_id: PostId,
        comment: &Comment,
    ) -> Result<UpdateResult, StoreError>;

    /// Matches only when both the post and the comment exist.
    async fn update_comment(
        &self,
        post_id: PostId,
        comment_id: CommentId,
        update: &CommentUpdate,
    ) -> Result<UpdateResult, StoreError>;

    /// Removes a comment from the post's comment array.
    async fn pull_comment(
        &self,
        post_id: PostId,
        comment_id: CommentId,
    ) -> Result<UpdateResult, StoreError>;
}
