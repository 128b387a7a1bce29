//! Reaction log entity <-> model mapper

use social_core::entities::ReactionLog;
use social_core::error::DomainError;
use social_core::value_objects::{ReactTarget, ReactionType};

use crate::models::ReactionLogModel;

impl TryFrom<ReactionLogModel> for ReactionLog {
    type Error = DomainError;

    fn try_from(model: ReactionLogModel) -> Result<Self, Self::Error> {
        Ok(ReactionLog {
            id: model.id,
            user_id: model.user_id,
            target_id: model.target_id,
            target: ReactTarget::try_from(model.target)?,
            reaction_type: ReactionType::try_from(model.reaction_type)?,
            created_at: model.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_unknown_reaction_type_is_rejected() {
        let model = ReactionLogModel {
            id: 1,
            user_id: 1,
            target_id: 1,
            target: 1,
            reaction_type: 99,
            created_at: Utc::now(),
        };
        let err = ReactionLog::try_from(model).unwrap_err();
        assert_eq!(err.code(), "INVALID_REACTION_TYPE");
    }
}
