//! Reaction type - the emotion a user attaches to a post or comment

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Kind of reaction.
///
/// Persisted as a SMALLINT discriminant and serialized by variant name, so
/// it can be used directly as a JSON map key in aggregated stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ReactionType {
    Like = 0,
    Love = 1,
    Haha = 2,
    Wow = 3,
    Sad = 4,
    Angry = 5,
}

impl ReactionType {
    /// Every reaction type in discriminant order
    pub const ALL: [Self; 6] = [
        Self::Like,
        Self::Love,
        Self::Haha,
        Self::Wow,
        Self::Sad,
        Self::Angry,
    ];

    /// Stored discriminant
    #[inline]
    pub fn as_i16(self) -> i16 {
        self as i16
    }

    /// Human-readable name shown next to reaction lists
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Like => "Like",
            Self::Love => "Love",
            Self::Haha => "Haha",
            Self::Wow => "Wow",
            Self::Sad => "Sad",
            Self::Angry => "Angry",
        }
    }
}

impl TryFrom<i16> for ReactionType {
    type Error = DomainError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_i16() == value)
            .ok_or(DomainError::InvalidReactionType(value))
    }
}

impl FromStr for ReactionType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.display_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::ValidationError(format!("unknown reaction type: {s}")))
    }
}

impl fmt::Display for ReactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
