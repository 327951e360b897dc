use anyhow::anyhow;
use tracing::{info, instrument};

use blogdeck_core::AppError;
use blogdeck_db::{PostFilter, PostStore};
use blogdeck_models::{NewPost, Post, PostId, PostUpdate};

pub struct PostService;

impl PostService {
    pub(crate) fn not_found() -> AppError {
        AppError::not_found(anyhow!("Post not found"))
    }

    #[instrument(skip(posts))]
    pub async fn list_posts(posts: &dyn PostStore, filter: PostFilter) -> Result<Vec<Post>, AppError> {
        Ok(posts.find(&filter).await?)
    }

    #[instrument(skip(posts))]
    pub async fn get_post(posts: &dyn PostStore, id: PostId) -> Result<Post, AppError> {
        posts.find_one(id).await?.ok_or_else(Self::not_found)
    }

    #[instrument(skip(posts))]
    pub async fn create_post(posts: &dyn PostStore, new_post: NewPost) -> Result<Post, AppError> {
        let post = posts.insert_one(new_post).await?;
        info!(post_id = %post.id, "Post created");
        Ok(post)
    }

    /// Applies `update` and returns the post as stored afterwards.
    #[instrument(skip(posts))]
    pub async fn update_post(
        posts: &dyn PostStore,
        id: PostId,
        update: PostUpdate,
    ) -> Result<Post, AppError> {
        if update.is_empty() {
            return Err(AppError::bad_request(anyhow!("No fields to update")));
        }

        let result = posts.update_one(id, &update).await?;
        if !result.matched() {
            return Err(Self::not_found());
        }

        Self::get_post(posts, id).await
    }

    #[instrument(skip(posts))]
    pub async fn delete_post(posts: &dyn PostStore, id: PostId) -> Result<(), AppError> {
        if !posts.delete_one(id).await?.deleted() {
            return Err(Self::not_found());
        }

        info!(post_id = %id, "Post deleted");
        Ok(())
    }
}
