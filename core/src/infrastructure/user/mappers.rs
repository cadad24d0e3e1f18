use chrono::Utc;

use crate::domain::user::entities::{Role, User, UserCredentials};
use crate::entity::users::Model as UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            name: model.name,
            lastname: model.lastname,
            username: model.username,
            email: model.email,
            phone: model.phone,
            role: Role::parse_lossy(&model.role),
            email_verified: model.email_verified,
            phone_verified: model.phone_verified,
            img: model.img,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

impl From<UserModel> for UserCredentials {
    fn from(mut model: UserModel) -> Self {
        let password_hash = std::mem::take(&mut model.password);

        UserCredentials {
            user: User::from(model),
            password_hash,
        }
    }
}
