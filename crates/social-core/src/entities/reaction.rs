//! Reaction log entity and the toggle rule that governs it

use chrono::{DateTime, Utc};

use crate::value_objects::{ReactTarget, ReactionType};

/// One user's reaction on a post or a comment.
///
/// At most one row exists per (user, target id, target kind).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionLog {
    pub id: i64,
    pub user_id: i64,
    pub target_id: i64,
    pub target: ReactTarget,
    pub reaction_type: ReactionType,
    pub created_at: DateTime<Utc>,
}

/// Reaction about to be inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReaction {
    pub user_id: i64,
    pub target_id: i64,
    pub target: ReactTarget,
    pub reaction_type: ReactionType,
}

/// Storage change produced by reacting to a target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionChange {
    /// No reaction yet: add one
    Insert(ReactionType),
    /// Same reaction applied again: take it back
    Remove,
    /// A different reaction exists: change its type in place
    Switch { from: ReactionType, to: ReactionType },
}

impl ReactionChange {
    /// Decide what reacting with `requested` does given the current state
    pub fn decide(existing: Option<ReactionType>, requested: ReactionType) -> Self {
        match existing {
            None => Self::Insert(requested),
            Some(current) if current == requested => Self::Remove,
            Some(current) => Self::Switch {
                from: current,
                to: requested,
            },
        }
    }

    /// Reaction held by the user once the change is applied
    pub fn resulting_state(self) -> Option<ReactionType> {
        match self {
            Self::Insert(t) | Self::Switch { to: t, .. } => Some(t),
            Self::Remove => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: Option<ReactionType>, requested: ReactionType) -> Option<ReactionType> {
        ReactionChange::decide(state, requested).resulting_state()
    }

    #[test]
    fn test_absent_inserts() {
        assert_eq!(
            ReactionChange::decide(None, ReactionType::Like),
            ReactionChange::Insert(ReactionType::Like)
        );
    }

    #[test]
    fn test_same_type_removes() {
        assert_eq!(
            ReactionChange::decide(Some(ReactionType::Like), ReactionType::Like),
            ReactionChange::Remove
        );
    }

    #[test]
    fn test_other_type_switches() {
        assert_eq!(
            ReactionChange::decide(Some(ReactionType::Like), ReactionType::Sad),
            ReactionChange::Switch {
                from: ReactionType::Like,
                to: ReactionType::Sad
            }
        );
    }

    #[test]
    fn test_flip_flop_sequence() {
        let mut state = None;
        state = apply(state, ReactionType::Love);
        assert_eq!(state, Some(ReactionType::Love));
        state = apply(state, ReactionType::Love);
        assert_eq!(state, None);
        state = apply(state, ReactionType::Love);
        assert_eq!(state, Some(ReactionType::Love));
    }

    #[test]
    fn test_every_pair_follows_state_machine() {
        for first in ReactionType::ALL {
            for second in ReactionType::ALL {
                let state = apply(apply(None, first), second);
                if first == second {
                    assert_eq!(state, None);
                } else {
                    assert_eq!(state, Some(second));
                }
            }
        }
    }
}
