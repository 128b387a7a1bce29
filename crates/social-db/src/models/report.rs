//! Post report database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for post_reports table
#[derive(Debug, Clone, FromRow)]
pub struct PostReportModel {
    pub user_id: i64,
    pub post_id: i64,
    pub reason: i16,
    pub description: String,
    pub checked: bool,
    pub report_date: DateTime<Utc>,
}
