//! PostgreSQL implementation of ReactionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use social_core::entities::{NewReaction, ReactionLog};
use social_core::error::DomainError;
use social_core::traits::{ReactionRepository, RepoResult};
use social_core::value_objects::{ReactTarget, ReactionType};

use crate::models::ReactionLogModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self))]
    async fn find(
        &self,
        user_id: i64,
        target_id: i64,
        target: ReactTarget,
    ) -> RepoResult<Option<ReactionLog>> {
        let result = sqlx::query_as::<_, ReactionLogModel>(
            r"
            SELECT id, user_id, target_id, target, reaction_type, created_at
            FROM reaction_logs
            WHERE user_id = $1 AND target_id = $2 AND target = $3
            ",
        )
        .bind(user_id)
        .bind(target_id)
        .bind(target.as_i16())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(ReactionLog::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_target(
        &self,
        target: ReactTarget,
        target_id: i64,
    ) -> RepoResult<Vec<ReactionLog>> {
        let rows = sqlx::query_as::<_, ReactionLogModel>(
            r"
            SELECT id, user_id, target_id, target, reaction_type, created_at
            FROM reaction_logs
            WHERE target = $1 AND target_id = $2
            ORDER BY id
            ",
        )
        .bind(target.as_i16())
        .bind(target_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(ReactionLog::try_from).collect()
    }

    #[instrument(skip(self, reaction), fields(target_id = reaction.target_id))]
    async fn create(&self, reaction: &NewReaction) -> RepoResult<ReactionLog> {
        let row = sqlx::query_as::<_, ReactionLogModel>(
            r"
            INSERT INTO reaction_logs (user_id, target_id, target, reaction_type)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, target_id, target, reaction_type, created_at
            ",
        )
        .bind(reaction.user_id)
        .bind(reaction.target_id)
        .bind(reaction.target.as_i16())
        .bind(reaction.reaction_type.as_i16())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::ReactionAlreadyExists))?;

        ReactionLog::try_from(row)
    }

    #[instrument(skip(self))]
    async fn update_type(&self, id: i64, reaction_type: ReactionType) -> RepoResult<()> {
        let result = sqlx::query("UPDATE reaction_logs SET reaction_type = $2 WHERE id = $1")
            .bind(id)
            .bind(reaction_type.as_i16())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::DatabaseError(format!(
                "reaction log {id} vanished during update"
            )));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        sqlx::query("DELETE FROM reaction_logs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}
