//! PostgreSQL implementation of PostRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use social_core::entities::{NewPost, Post, PostWithStats};
use social_core::error::DomainError;
use social_core::traits::{PostRepository, RepoResult};
use social_core::value_objects::ReactTarget;

use crate::models::{PostModel, PostWithStatsModel};

use super::error::{map_db_error, map_fk_violation};

/// Columns of `posts p` plus the reaction and comment counters
const POST_WITH_STATS_COLUMNS: &str = r"
    p.id, p.user_id, p.content, p.created_at, p.updated_at,
    (SELECT COUNT(*) FROM reaction_logs r WHERE r.target = 0 AND r.target_id = p.id) AS reaction_count,
    (SELECT COUNT(*) FROM comments c WHERE c.post_id = p.id) AS comment_count
";

/// PostgreSQL implementation of PostRepository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    /// Create a new PgPostRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Post>> {
        let result = sqlx::query_as::<_, PostModel>(
            r"
            SELECT id, user_id, content, created_at, updated_at
            FROM posts
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Post::from))
    }

    #[instrument(skip(self))]
    async fn find_with_stats(&self, id: i64) -> RepoResult<Option<PostWithStats>> {
        let query = format!("SELECT {POST_WITH_STATS_COLUMNS} FROM posts p WHERE p.id = $1");
        let result = sqlx::query_as::<_, PostWithStatsModel>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(PostWithStats::from))
    }

    #[instrument(skip(self))]
    async fn list_with_stats(&self) -> RepoResult<Vec<PostWithStats>> {
        let query = format!(
            "SELECT {POST_WITH_STATS_COLUMNS} FROM posts p ORDER BY p.created_at DESC, p.id DESC"
        );
        let results = sqlx::query_as::<_, PostWithStatsModel>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(PostWithStats::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_with_stats_by_user(&self, user_id: i64) -> RepoResult<Vec<PostWithStats>> {
        let query = format!(
            "SELECT {POST_WITH_STATS_COLUMNS} FROM posts p WHERE p.user_id = $1 \
             ORDER BY p.created_at DESC, p.id DESC"
        );
        let results = sqlx::query_as::<_, PostWithStatsModel>(&query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(PostWithStats::from).collect())
    }

    #[instrument(skip(self, post), fields(user_id = post.user_id))]
    async fn create(&self, post: &NewPost) -> RepoResult<Post> {
        let result = sqlx::query_as::<_, PostModel>(
            r"
            INSERT INTO posts (user_id, content)
            VALUES ($1, $2)
            RETURNING id, user_id, content, created_at, updated_at
            ",
        )
        .bind(post.user_id)
        .bind(&post.content)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_fk_violation(e, || DomainError::UserNotFound(post.user_id.to_string())))?;

        Ok(Post::from(result))
    }

    #[instrument(skip(self, post), fields(post_id = post.id))]
    async fn update(&self, post: &Post) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE posts
            SET content = $2, updated_at = $3
            WHERE id = $1
            ",
        )
        .bind(post.id)
        .bind(&post.content)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::PostNotFound(post.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Reactions point at posts and comments without a foreign key
        sqlx::query(
            r"
            DELETE FROM reaction_logs
            WHERE (target = $2 AND target_id = $1)
               OR (target = $3 AND target_id IN (SELECT id FROM comments WHERE post_id = $1))
            ",
        )
        .bind(id)
        .bind(ReactTarget::Post.as_i16())
        .bind(ReactTarget::Comment.as_i16())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        // comments, likes and reports cascade
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::PostNotFound(id));
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgPostRepository>();
    }

    #[test]
    fn test_stats_columns_count_post_reactions_only() {
        assert!(POST_WITH_STATS_COLUMNS.contains("r.target = 0"));
        assert!(POST_WITH_STATS_COLUMNS.contains("AS comment_count"));
    }
}
