//! Report handlers

use axum::extract::State;
use social_service::{ReportPostRequest, ReportService, ReportView};

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiJson, ApiResult, NoContent};
use crate::state::AppState;

/// Report a post; reporting it again revises the earlier report
///
/// POST /posts/{post_id}/reports
pub async fn report_post(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(post_id): IdPath<i64>,
    ValidatedJson(request): ValidatedJson<ReportPostRequest>,
) -> ApiResult<NoContent> {
    let service = ReportService::new(state.service_context());
    service
        .report(&auth.username, post_id, request.reason, request.description)
        .await?;
    Ok(NoContent)
}

/// Every report, newest first
///
/// GET /reports
pub async fn list_reports(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<ApiJson<Vec<ReportView>>> {
    let service = ReportService::new(state.service_context());
    let reports = service.list_reports().await?;
    Ok(ApiJson(reports))
}
