//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use social_core::entities::{Comment, NewComment, ReactionLog};
use social_core::error::DomainError;
use social_core::traits::{CommentRepository, RepoResult};
use social_core::value_objects::ReactTarget;

use crate::mappers::attach_reactions;
use crate::models::{CommentModel, ReactionLogModel};

use super::error::{map_db_error, map_fk_violation};

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn reactions_for(&self, comment_ids: &[i64]) -> RepoResult<Vec<ReactionLog>> {
        if comment_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, ReactionLogModel>(
            r"
            SELECT id, user_id, target_id, target, reaction_type, created_at
            FROM reaction_logs
            WHERE target = $1 AND target_id = ANY($2)
            ORDER BY id
            ",
        )
        .bind(ReactTarget::Comment.as_i16())
        .bind(comment_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(ReactionLog::try_from).collect()
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Comment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, post_id, parent_id, level, user_id, content, created_at, updated_at
            FROM comments
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Comment::from))
    }

    #[instrument(skip(self))]
    async fn find_by_post(&self, post_id: i64) -> RepoResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, post_id, parent_id, level, user_id, content, created_at, updated_at
            FROM comments
            WHERE post_id = $1
            ORDER BY id ASC
            ",
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let ids: Vec<i64> = rows.iter().map(|row| row.id).collect();
        let reactions = self.reactions_for(&ids).await?;

        Ok(attach_reactions(rows, reactions))
    }

    #[instrument(skip(self))]
    async fn count_by_post(&self, post_id: i64) -> RepoResult<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM comments WHERE post_id = $1")
            .bind(post_id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(count.0)
    }

    #[instrument(skip(self, comment), fields(post_id = comment.post_id, level = comment.level))]
    async fn create(&self, comment: &NewComment) -> RepoResult<i64> {
        let (id,): (i64,) = sqlx::query_as(
            r"
            INSERT INTO comments (post_id, parent_id, level, user_id, content)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            ",
        )
        .bind(comment.post_id)
        .bind(comment.parent_id)
        .bind(comment.level)
        .bind(comment.user_id)
        .bind(&comment.content)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_fk_violation(e, || DomainError::PostNotFound(comment.post_id)))?;

        Ok(id)
    }

    #[instrument(skip(self, comment), fields(comment_id = comment.id))]
    async fn update(&self, comment: &Comment) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE comments
            SET content = $2, updated_at = $3
            WHERE id = $1
            ",
        )
        .bind(comment.id)
        .bind(&comment.content)
        .bind(comment.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::CommentNotFound(comment.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // The comment and every reply beneath it, whatever the depth
        let doomed: Vec<(i64,)> = sqlx::query_as(
            r"
            WITH RECURSIVE thread AS (
                SELECT id, post_id FROM comments WHERE id = $1
                UNION ALL
                SELECT c.id, c.post_id
                FROM comments c
                JOIN thread t ON c.parent_id = t.id AND c.post_id = t.post_id
            )
            SELECT DISTINCT id FROM thread
            ",
        )
        .bind(id)
        .fetch_all(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if doomed.is_empty() {
            return Err(DomainError::CommentNotFound(id));
        }

        let ids: Vec<i64> = doomed.into_iter().map(|(id,)| id).collect();

        sqlx::query("DELETE FROM reaction_logs WHERE target = $1 AND target_id = ANY($2)")
            .bind(ReactTarget::Comment.as_i16())
            .bind(&ids)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        sqlx::query("DELETE FROM comments WHERE id = ANY($1)")
            .bind(&ids)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}
