//! PostgreSQL-backed stores.
//!
//! Users live in the `users` table. Posts live in `posts`, with their comments
//! embedded as a `jsonb` array, so every comment operation is one `UPDATE`
//! on the owning post row.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use tracing::instrument;

use blogdeck_models::{
    Comment, CommentId, CommentUpdate, NewPost, NewUser, Post, PostId, PostUpdate, UserId,
    UserRecord,
};

use crate::error::StoreError;
use crate::store::{DeleteResult, PostFilter, PostStore, UpdateResult, UserStore};

const USER_COLUMNS: &str = "id, email, password_hash, created_at";
const POST_COLUMNS: &str = "id, title, content, author, comments, created_at, updated_at";

#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    #[instrument(skip(self, user), fields(email = %user.email))]
    async fn insert_one(&self, user: NewUser) -> Result<UserRecord, StoreError> {
        let record = user.into_record();

        sqlx::query_as::<_, UserRecord>(&format!(
            "INSERT INTO users ({USER_COLUMNS}) VALUES ($1, $2, $3, $4) RETURNING {USER_COLUMNS}"
        ))
        .bind(record.id)
        .bind(&record.email)
        .bind(&record.password_hash)
        .bind(record.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(StoreError::from_insert)
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        let user = sqlx::query_as::<_, UserRecord>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: UserId) -> Result<Option<UserRecord>, StoreError> {
        let user = sqlx::query_as::<_, UserRecord>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<UserRecord>, StoreError> {
        let users = sqlx::query_as::<_, UserRecord>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY created_at ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    #[instrument(skip(self))]
    async fn delete_one(&self, id: UserId) -> Result<DeleteResult, StoreError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(DeleteResult {
            deleted_count: result.rows_affected(),
        })
    }
}

#[derive(FromRow)]
struct PostRow {
    id: PostId,
    title: String,
    content: String,
    author: Option<String>,
    comments: Json<Vec<Comment>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            content: row.content,
            author: row.author,
            comments: row.comments.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PgPostStore {
    pool: PgPool,
}

impl PgPostStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Pushing or pulling a comment always changes the array it matches.
    fn comment_result(rows_affected: u64) -> UpdateResult {
        UpdateResult {
            matched_count: rows_affected,
            modified_count: rows_affected,
        }
    }
}

#[async_trait]
impl PostStore for PgPostStore {
    #[instrument(skip(self))]
    async fn find(&self, filter: &PostFilter) -> Result<Vec<Post>, StoreError> {
        let rows = sqlx::query_as::<_, PostRow>(&format!(
            r"SELECT {POST_COLUMNS} FROM posts
              WHERE $1::text IS NULL
                 OR title ILIKE $1 ESCAPE '\'
                 OR content ILIKE $1 ESCAPE '\'
              ORDER BY created_at DESC"
        ))
        .bind(filter.like_pattern())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_one(&self, id: PostId) -> Result<Option<Post>, StoreError> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Post::from))
    }

    #[instrument(skip(self, post), fields(title = %post.title))]
    async fn insert_one(&self, post: NewPost) -> Result<Post, StoreError> {
        let post = post.into_post();

        let row = sqlx::query_as::<_, PostRow>(&format!(
            "INSERT INTO posts ({POST_COLUMNS}) VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {POST_COLUMNS}"
        ))
        .bind(post.id)
        .bind(&post.title)
        .bind(&post.content)
        .bind(&post.author)
        .bind(Json(&post.comments))
        .bind(post.created_at)
        .bind(post.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    #[instrument(skip(self, update))]
    async fn update_one(
        &self,
        id: PostId,
        update: &PostUpdate,
    ) -> Result<UpdateResult, StoreError> {
        let (matched, modified) = sqlx::query_as::<_, (i64, i64)>(
            r"WITH target AS (
                  SELECT id FROM posts WHERE id = $1
              ),
              updated AS (
                  UPDATE posts
                  SET title = COALESCE($2::text, title),
                      content = COALESCE($3::text, content),
                      author = COALESCE($4::text, author),
                      updated_at = now()
                  WHERE id = $1
                    AND (title IS DISTINCT FROM COALESCE($2::text, title)
                      OR content IS DISTINCT FROM COALESCE($3::text, content)
                      OR author IS DISTINCT FROM COALESCE($4::text, author))
                  RETURNING id
              )
              SELECT (SELECT COUNT(*) FROM target), (SELECT COUNT(*) FROM updated)",
        )
        .bind(id)
        .bind(&update.title)
        .bind(&update.content)
        .bind(&update.author)
        .fetch_one(&self.pool)
        .await?;

        Ok(UpdateResult {
            matched_count: matched as u64,
            modified_count: modified as u64,
        })
    }

    #[instrument(skip(self))]
    async fn delete_one(&self, id: PostId) -> Result<DeleteResult, StoreError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(DeleteResult {
            deleted_count: result.rows_affected(),
        })
    }

    #[instrument(skip(self, comment), fields(comment_id = %comment.id))]
    async fn push_comment(
        &self,
        post_id: PostId,
        comment: &Comment,
    ) -> Result<UpdateResult, StoreError> {
        let result = sqlx::query(
            "UPDATE posts
             SET comments = comments || jsonb_build_array($2::jsonb), updated_at = now()
             WHERE id = $1",
        )
        .bind(post_id)
        .bind(Json(comment))
        .execute(&self.pool)
        .await?;

        Ok(Self::comment_result(result.rows_affected()))
    }

    #[instrument(skip(self, update))]
    async fn update_comment(
        &self,
        post_id: PostId,
        comment_id: CommentId,
        update: &CommentUpdate,
    ) -> Result<UpdateResult, StoreError> {
        let (matched, modified) = sqlx::query_as::<_, (i64, i64)>(
            r"WITH target AS (
                  SELECT id, comments FROM posts
                  WHERE id = $1
                    AND comments @> jsonb_build_array(jsonb_build_object('id', $2::text))
              ),
              merged AS (
                  SELECT t.id,
                         (SELECT jsonb_agg(
                                     CASE WHEN c->>'id' = $2::text THEN c || $3::jsonb ELSE c END
                                     ORDER BY ord)
                          FROM jsonb_array_elements(t.comments) WITH ORDINALITY AS e(c, ord)
                         ) AS comments
                  FROM target t
              ),
              updated AS (
                  UPDATE posts p
                  SET comments = m.comments, updated_at = now()
                  FROM merged m
                  WHERE p.id = m.id AND p.comments IS DISTINCT FROM m.comments
                  RETURNING p.id
              )
              SELECT (SELECT COUNT(*) FROM target), (SELECT COUNT(*) FROM updated)",
        )
        .bind(post_id)
        .bind(comment_id.to_string())
        .bind(Json(update))
        .fetch_one(&self.pool)
        .await?;

        Ok(UpdateResult {
            matched_count: matched as u64,
            modified_count: modified as u64,
        })
    }

    #[instrument(skip(self))]
    async fn pull_comment(
        &self,
        post_id: PostId,
        comment_id: CommentId,
    ) -> Result<UpdateResult, StoreError> {
        let result = sqlx::query(
            r"UPDATE posts
              SET comments = COALESCE((
                      SELECT jsonb_agg(c ORDER BY ord)
                      FROM jsonb_array_elements(comments) WITH ORDINALITY AS t(c, ord)
                      WHERE c->>'id' <> $2::text
                  ), '[]'::jsonb),
                  updated_at = now()
              WHERE id = $1
                AND comments @> jsonb_build_array(jsonb_build_object('id', $2::text))",
        )
        .bind(post_id)
        .bind(comment_id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(Self::comment_result(result.rows_affected()))
    }
}
