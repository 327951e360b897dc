//! In-memory stores.
//!
//! Used when no `DATABASE_URL` is configured and by the test suites. Each
//! operation takes the lock once, which gives the same per-operation
//! atomicity as a single SQL statement.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use blogdeck_models::{
    Comment, CommentId, CommentUpdate, NewPost, NewUser, Post, PostId, PostUpdate, UserId,
    UserRecord,
};

use crate::error::StoreError;
use crate::store::{DeleteResult, PostFilter, PostStore, UpdateResult, UserStore};

#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: RwLock<Vec<UserRecord>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert_one(&self, user: NewUser) -> Result<UserRecord, StoreError> {
        let mut users = self.users.write().await;

        if users.iter().any(|u| u.email == user.email) {
            return Err(StoreError::DuplicateEmail);
        }

        let record = user.into_record();
        users.push(record.clone());
        Ok(record)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<UserRecord>, StoreError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<UserRecord>, StoreError> {
        Ok(self.users.read().await.clone())
    }

    async fn delete_one(&self, id: UserId) -> Result<DeleteResult, StoreError> {
        let mut users = self.users.write().await;
        let before = users.len();
        users.retain(|u| u.id != id);

        Ok(DeleteResult {
            deleted_count: (before - users.len()) as u64,
        })
    }
}

#[derive(Debug, Default)]
pub struct MemoryPostStore {
    posts: RwLock<Vec<Post>>,
}

impl MemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` against the post with `id` under the write lock.
    async fn modify<F>(&self, id: PostId, f: F) -> UpdateResult
    where
        F: FnOnce(&mut Post) -> Option<bool> + Send,
    {
        let mut posts = self.posts.write().await;

        let Some(post) = posts.iter_mut().find(|p| p.id == id) else {
            return UpdateResult::default();
        };

        match f(post) {
            None => UpdateResult::default(),
            Some(changed) => {
                if changed {
                    post.updated_at = Utc::now();
                }
                UpdateResult {
                    matched_count: 1,
                    modified_count: u64::from(changed),
                }
            }
        }
    }
}

#[async_trait]
impl PostStore for MemoryPostStore {
    async fn find(&self, filter: &PostFilter) -> Result<Vec<Post>, StoreError> {
        let posts = self.posts.read().await;
        Ok(posts
            .iter()
            .rev()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect())
    }

    async fn find_one(&self, id: PostId) -> Result<Option<Post>, StoreError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn insert_one(&self, post: NewPost) -> Result<Post, StoreError> {
        let post = post.into_post();
        self.posts.write().await.push(post.clone());
        Ok(post)
    }

    async fn update_one(
        &self,
        id: PostId,
        update: &PostUpdate,
    ) -> Result<UpdateResult, StoreError> {
        Ok(self.modify(id, |post| Some(update.apply(post))).await)
    }

    async fn delete_one(&self, id: PostId) -> Result<DeleteResult, StoreError> {
        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|p| p.id != id);

        Ok(DeleteResult {
            deleted_count: (before - posts.len()) as u64,
        })
    }

    async fn push_comment(
        &self,
        post_id: PostId,
        comment: &Comment,
    ) -> Result<UpdateResult, StoreError> {
        Ok(self
            .modify(post_id, |post| {
                post.comments.push(comment.clone());
                Some(true)
            })
            .await)
    }

    async fn update_comment(
        &self,
        post_id: PostId,
        comment_id: CommentId,
        update: &CommentUpdate,
    ) -> Result<UpdateResult, StoreError> {
        Ok(self
            .modify(post_id, |post| {
                post.comments
                    .iter_mut()
                    .find(|c| c.id == comment_id)
                    .map(|comment| update.apply(comment))
            })
            .await)
    }

    async fn pull_comment(
        &self,
        post_id: PostId,
        comment_id: CommentId,
    ) -> Result<UpdateResult, StoreError> {
        Ok(self
            .modify(post_id, |post| {
                let before = post.comments.len();
                post.comments.retain(|c| c.id != comment_id);
                (post.comments.len() < before).then_some(true)
            })
            .await)
    }
}
