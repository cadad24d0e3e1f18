use std::sync::Arc;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, SqlErr,
};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    user::{
        entities::{User, UserCredentials},
        ports::UserRepository,
    },
};
use crate::entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity, Model as UserModel,
};

fn map_write_error(action: &str, e: DbErr) -> CoreError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            CoreError::Conflict("username or email already in use".to_string())
        }
        _ => {
            error!("Failed to {} user: {}", action, e);
            CoreError::InternalServerError
        }
    }
}

#[derive(Debug)]
pub struct PostgresUserRepository {
    pub db: Arc<DatabaseConnection>,
}

impl PostgresUserRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_one(&self, column: UserColumn, value: String) -> Result<Option<UserModel>, CoreError> {
        UserEntity::find()
            .filter(column.eq(value))
            .one(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to get user: {}", e);
                CoreError::InternalServerError
            })
    }

    async fn save(&self, model: UserActiveModel, action: &str) -> Result<User, CoreError> {
        model.update(self.db.as_ref()).await.map(User::from).map_err(|e| match e {
            DbErr::RecordNotUpdated => CoreError::NotFound,
            e => map_write_error(action, e),
        })
    }
}

impl UserRepository for PostgresUserRepository {
    async fn get_by_id(&self, user_id: Uuid) -> Result<Option<User>, CoreError> {
        let user = UserEntity::find_by_id(user_id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to get user by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(User::from);

        Ok(user)
    }

    async fn get_by_email(&self, email: String) -> Result<Option<User>, CoreError> {
        Ok(self
            .find_one(UserColumn::Email, email)
            .await?
            .map(User::from))
    }

    async fn get_credentials(&self, login: String) -> Result<Option<UserCredentials>, CoreError> {
        if let Some(model) = self.find_one(UserColumn::Username, login.clone()).await? {
            return Ok(Some(UserCredentials::from(model)));
        }

        Ok(self
            .find_one(UserColumn::Email, login)
            .await?
            .map(UserCredentials::from))
    }

    async fn get_password_hash(&self, user_id: Uuid) -> Result<Option<String>, CoreError> {
        let hash = UserEntity::find_by_id(user_id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to get password hash: {}", e);
                CoreError::InternalServerError
            })?
            .map(|model| model.password);

        Ok(hash)
    }

    async fn create_user(&self, user: User, password_hash: String) -> Result<User, CoreError> {
        let created = UserEntity::insert(UserActiveModel {
            id: Set(user.id),
            name: Set(user.name),
            lastname: Set(user.lastname),
            username: Set(user.username),
            email: Set(user.email),
            phone: Set(user.phone),
            password: Set(password_hash),
            role: Set(user.role.as_str().to_string()),
            email_verified: Set(user.email_verified),
            phone_verified: Set(user.phone_verified),
            img: Set(user.img),
            created_at: Set(user.created_at.fixed_offset()),
            updated_at: Set(user.updated_at.fixed_offset()),
        })
        .exec_with_returning(self.db.as_ref())
        .await
        .map(User::from)
        .map_err(|e| map_write_error("create", e))?;

        Ok(created)
    }

    async fn update_user(&self, user: User) -> Result<User, CoreError> {
        let model = UserActiveModel {
            id: Set(user.id),
            name: Set(user.name),
            lastname: Set(user.lastname),
            email: Set(user.email),
            phone: Set(user.phone),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        self.save(model, "update").await
    }

    async fn update_password(&self, user_id: Uuid, password_hash: String) -> Result<(), CoreError> {
        let model = UserActiveModel {
            id: Set(user_id),
            password: Set(password_hash),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        self.save(model, "update password of").await?;
        Ok(())
    }

    async fn update_picture(&self, user_id: Uuid, img: Option<String>) -> Result<User, CoreError> {
        let model = UserActiveModel {
            id: Set(user_id),
            img: Set(img),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        self.save(model, "update picture of").await
    }
}
