//! Post report entity

use chrono::{DateTime, Utc};

use crate::value_objects::ReportReason;

/// A user's report against a post, unique per (user, post)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostReport {
    pub user_id: i64,
    pub post_id: i64,
    pub reason: ReportReason,
    pub description: String,
    /// Set once a moderator has reviewed the report
    pub checked: bool,
    pub report_date: DateTime<Utc>,
}

impl PostReport {
    /// Fresh, unchecked report stamped with the current time
    pub fn new(
        user_id: i64,
        post_id: i64,
        reason: ReportReason,
        description: Option<String>,
    ) -> Self {
        Self {
            user_id,
            post_id,
            reason,
            description: description.unwrap_or_default(),
            checked: false,
            report_date: Utc::now(),
        }
    }

    /// Overwrite reason and description, keeping review state and date
    pub fn revise(&mut self, reason: ReportReason, description: Option<String>) {
        self.reason = reason;
        self.description = description.unwrap_or_default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_report_is_unchecked() {
        let report = PostReport::new(1, 2, ReportReason::Spam, None);
        assert!(!report.checked);
        assert_eq!(report.description, "");
    }

    #[test]
    fn test_revise_overwrites_reason() {
        let mut report = PostReport::new(1, 2, ReportReason::Spam, Some("ads".to_string()));
        let date = report.report_date;
        report.revise(ReportReason::Violence, Some("threats".to_string()));
        assert_eq!(report.reason, ReportReason::Violence);
        assert_eq!(report.description, "threats");
        assert_eq!(report.report_date, date);
    }
}
