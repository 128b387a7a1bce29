//! User entity <-> model mapper

use social_core::entities::User;

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            username: model.username,
            known_as: model.known_as,
            photo_url: model.photo_url,
            created_at: model.created_at,
        }
    }
}
