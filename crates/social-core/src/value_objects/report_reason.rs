//! Report reason - why a user flagged a post

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Reason attached to a post report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportReason {
    Spam = 0,
    Harassment = 1,
    Nudity = 2,
    Violence = 3,
    FalseInformation = 4,
    HateSpeech = 5,
    Other = 6,
}

impl ReportReason {
    pub const ALL: [Self; 7] = [
        Self::Spam,
        Self::Harassment,
        Self::Nudity,
        Self::Violence,
        Self::FalseInformation,
        Self::HateSpeech,
        Self::Other,
    ];

    #[inline]
    pub fn as_i16(self) -> i16 {
        self as i16
    }

    /// Label shown to moderators
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Spam => "Spam",
            Self::Harassment => "Harassment or bullying",
            Self::Nudity => "Nudity or sexual content",
            Self::Violence => "Violence",
            Self::FalseInformation => "False information",
            Self::HateSpeech => "Hate speech",
            Self::Other => "Other",
        }
    }
}

impl TryFrom<i16> for ReportReason {
    type Error = DomainError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_i16() == value)
            .ok_or(DomainError::InvalidReportReason(value))
    }
}
