//! PostgreSQL implementation of ReportRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use social_core::entities::PostReport;
use social_core::error::DomainError;
use social_core::traits::{ReportRepository, RepoResult};

use crate::models::PostReportModel;

use super::error::{map_db_error, map_fk_violation, map_unique_violation};

/// PostgreSQL implementation of ReportRepository
#[derive(Clone)]
pub struct PgReportRepository {
    pool: PgPool,
}

impl PgReportRepository {
    /// Create a new PgReportRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportRepository for PgReportRepository {
    #[instrument(skip(self))]
    async fn find(&self, user_id: i64, post_id: i64) -> RepoResult<Option<PostReport>> {
        let result = sqlx::query_as::<_, PostReportModel>(
            r"
            SELECT user_id, post_id, reason, description, checked, report_date
            FROM post_reports
            WHERE user_id = $1 AND post_id = $2
            ",
        )
        .bind(user_id)
        .bind(post_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(PostReport::try_from).transpose()
    }

    #[instrument(skip(self, report), fields(user_id = report.user_id, post_id = report.post_id))]
    async fn create(&self, report: &PostReport) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO post_reports (user_id, post_id, reason, description, checked, report_date)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(report.user_id)
        .bind(report.post_id)
        .bind(report.reason.as_i16())
        .bind(&report.description)
        .bind(report.checked)
        .bind(report.report_date)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if e.as_database_error()
                .is_some_and(|db| db.is_foreign_key_violation())
            {
                map_fk_violation(e, || DomainError::PostNotFound(report.post_id))
            } else {
                map_unique_violation(e, || {
                    DomainError::DuplicateEntry("post report".to_string())
                })
            }
        })?;

        Ok(())
    }

    #[instrument(skip(self, report), fields(user_id = report.user_id, post_id = report.post_id))]
    async fn update(&self, report: &PostReport) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE post_reports
            SET reason = $3, description = $4
            WHERE user_id = $1 AND post_id = $2
            ",
        )
        .bind(report.user_id)
        .bind(report.post_id)
        .bind(report.reason.as_i16())
        .bind(&report.description)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::PostNotFound(report.post_id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<PostReport>> {
        let rows = sqlx::query_as::<_, PostReportModel>(
            r"
            SELECT user_id, post_id, reason, description, checked, report_date
            FROM post_reports
            ORDER BY report_date DESC, post_id DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(PostReport::try_from).collect()
    }
}
