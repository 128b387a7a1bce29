//! PostgreSQL implementation of PostLikeRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use social_core::entities::PostLike;
use social_core::error::DomainError;
use social_core::traits::{PostLikeRepository, RepoResult};

use crate::models::PostLikeModel;

use super::error::{map_db_error, map_fk_violation};

/// PostgreSQL implementation of PostLikeRepository
#[derive(Clone)]
pub struct PgPostLikeRepository {
    pool: PgPool,
}

impl PgPostLikeRepository {
    /// Create a new PgPostLikeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostLikeRepository for PgPostLikeRepository {
    #[instrument(skip(self))]
    async fn find(&self, user_id: i64, post_id: i64) -> RepoResult<Option<PostLike>> {
        let result = sqlx::query_as::<_, PostLikeModel>(
            r"
            SELECT user_id, post_id, created_at
            FROM post_likes
            WHERE user_id = $1 AND post_id = $2
            ",
        )
        .bind(user_id)
        .bind(post_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(PostLike::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, user_id: i64, post_id: i64) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO post_likes (user_id, post_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id, post_id) DO NOTHING
            ",
        )
        .bind(user_id)
        .bind(post_id)
        .execute(&self.pool)
        .await
        .map_err(|e| map_fk_violation(e, || DomainError::PostNotFound(post_id)))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, user_id: i64, post_id: i64) -> RepoResult<()> {
        sqlx::query("DELETE FROM post_likes WHERE user_id = $1 AND post_id = $2")
            .bind(user_id)
            .bind(post_id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count_by_post(&self, post_id: i64) -> RepoResult<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM post_likes WHERE post_id = $1")
            .bind(post_id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(count.0)
    }
}
