//! Post report entity <-> model mapper

use social_core::entities::PostReport;
use social_core::error::DomainError;
use social_core::value_objects::ReportReason;

use crate::models::PostReportModel;

impl TryFrom<PostReportModel> for PostReport {
    type Error = DomainError;

    fn try_from(model: PostReportModel) -> Result<Self, Self::Error> {
        Ok(PostReport {
            user_id: model.user_id,
            post_id: model.post_id,
            reason: ReportReason::try_from(model.reason)?,
            description: model.description,
            checked: model.checked,
            report_date: model.report_date,
        })
    }
}
