//! React target - discriminates what a reaction is attached to

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Target kind of a reaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReactTarget {
    Post = 0,
    Comment = 1,
}

impl ReactTarget {
    #[inline]
    pub fn as_i16(self) -> i16 {
        self as i16
    }

    /// Resource name used in not-found errors
    pub fn resource(self) -> &'static str {
        match self {
            Self::Post => "Post",
            Self::Comment => "Comment",
        }
    }
}

impl TryFrom<i16> for ReactTarget {
    type Error = DomainError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Post),
            1 => Ok(Self::Comment),
            other => Err(DomainError::InvalidReactTarget(other)),
        }
    }
}
