use anyhow::anyhow;
use tracing::{info, instrument};

use blogdeck_core::AppError;
use blogdeck_db::PostStore;
use blogdeck_models::{Comment, CommentId, CommentUpdate, PostId};

use crate::modules::posts::service::PostService;

pub struct CommentService;

impl CommentService {
    fn not_found() -> AppError {
        AppError::not_found(anyhow!("Comment not found"))
    }

    #[instrument(skip(posts))]
    pub async fn add_comment(
        posts: &dyn PostStore,
        post_id: PostId,
        comment: Comment,
    ) -> Result<Comment, AppError> {
        if !posts.push_comment(post_id, &comment).await?.matched() {
            return Err(PostService::not_found());
        }

        info!(post_id = %post_id, comment_id = %comment.id, "Comment added");
        Ok(comment)
    }

    /// Applies `update` and returns the comment as stored afterwards.
    #[instrument(skip(posts))]
    pub async fn update_comment(
        posts: &dyn PostStore,
        post_id: PostId,
        comment_id: CommentId,
        update: CommentUpdate,
    ) -> Result<Comment, AppError> {
        if update.is_empty() {
            return Err(AppError::bad_request(anyhow!("No fields to update")));
        }

        let result = posts.update_comment(post_id, comment_id, &update).await?;
        if !result.matched() {
            return Err(Self::not_found());
        }

        posts
            .find_one(post_id)
            .await?
            .and_then(|post| post.comment(comment_id).cloned())
            .ok_or_else(Self::not_found)
    }

    #[instrument(skip(posts))]
    pub async fn delete_comment(
        posts: &dyn PostStore,
        post_id: PostId,
        comment_id: CommentId,
    ) -> Result<(), AppError> {
        if !posts.pull_comment(post_id, comment_id).await?.matched() {
            return Err(Self::not_found());
        }

        info!(post_id = %post_id, comment_id = %comment_id, "Comment deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blogdeck_core::ErrorKind;
    use blogdeck_db::MemoryPostStore;
    use blogdeck_models::NewPost;

    async fn store_with_post() -> (MemoryPostStore, PostId) {
        let posts = MemoryPostStore::new();
        let post = posts
            .insert_one(NewPost {
                title: "t".to_string(),
                content: "c".to_string(),
                author: None,
            })
            .await
            .unwrap();
        (posts, post.id)
    }

    fn comment(body: &str) -> Comment {
        Comment::new("ann".to_string(), body.to_string())
    }

    #[tokio::test]
    async fn test_add_comment_to_missing_post() {
        let posts = MemoryPostStore::new();
        let err = CommentService::add_comment(&posts, PostId::new(), comment("hi"))
            .await
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::NotFound);
        assert_eq!(err.client_message(), "Post not found");
    }

    #[tokio::test]
    async fn test_update_comment_returns_stored_comment() {
        let (posts, post_id) = store_with_post().await;
        let added = CommentService::add_comment(&posts, post_id, comment("hi"))
            .await
            .unwrap();

        let update = CommentUpdate {
            body: Some("edited".to_string()),
            ..Default::default()
        };
        let updated = CommentService::update_comment(&posts, post_id, added.id, update)
            .await
            .unwrap();

        assert_eq!(updated.id, added.id);
        assert_eq!(updated.author, "ann");
        assert_eq!(updated.body, "edited");
    }

    #[tokio::test]
    async fn test_delete_unknown_comment() {
        let (posts, post_id) = store_with_post().await;
        let err = CommentService::delete_comment(&posts, post_id, CommentId::new())
            .await
            .unwrap_err();

        assert_eq!(err.client_message(), "Comment not found");
    }
}
