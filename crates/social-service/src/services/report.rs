//! Report service
//!
//! Users flag posts for moderation; one report per user and post.

use social_core::entities::PostReport;
use social_core::value_objects::ReportReason;
use tracing::{info, instrument};

use crate::dto::ReportView;

use super::context::ServiceContext;
use super::error::{PersistenceContext, ServiceResult};
use super::post::PostService;
use super::user::UserService;

/// Report service
pub struct ReportService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReportService<'a> {
    /// Create a new ReportService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// File a report, or revise the one this user already filed for the post
    #[instrument(skip(self, description))]
    pub async fn report(
        &self,
        username: &str,
        post_id: i64,
        reason: ReportReason,
        description: Option<String>,
    ) -> ServiceResult<()> {
        let user_id = UserService::new(self.ctx).resolve_username(username).await?;
        PostService::new(self.ctx).require_post(post_id).await?;

        let reports = self.ctx.report_repo();
        match reports.find(user_id, post_id).await? {
            Some(mut existing) => {
                existing.revise(reason, description);
                reports
                    .update(&existing)
                    .await
                    .or_persistence("Failed to report post")?;
                info!(post_id = post_id, user_id = user_id, reason = ?reason, "Report revised");
            }
            None => {
                let report = PostReport::new(user_id, post_id, reason, description);
                reports
                    .create(&report)
                    .await
                    .or_persistence("Failed to report post")?;
                info!(post_id = post_id, user_id = user_id, reason = ?reason, "Post reported");
            }
        }

        Ok(())
    }

    /// All reports, newest first, with the reporter's nickname
    #[instrument(skip(self))]
    pub async fn list_reports(&self) -> ServiceResult<Vec<ReportView>> {
        let reports = self.ctx.report_repo().list().await?;
        let reporter_ids: Vec<i64> = reports.iter().map(|r| r.user_id).collect();
        let reporters = UserService::new(self.ctx).users_by_id(&reporter_ids).await?;

        Ok(reports
            .into_iter()
            .map(|report| {
                let known_as = reporters
                    .get(&report.user_id)
                    .map(|u| u.known_as_or_default().to_string())
                    .unwrap_or_default();
                ReportView::new(report, known_as)
            })
            .collect())
    }
}
