use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    storage::entities::UploadedFile,
    user::{
        entities::{User, UserCredentials},
        value_objects::{CreateUserInput, UpdatePasswordInput, UpdateUserInput},
    },
};

pub trait UserService: Send + Sync {
    fn create_user(
        &self,
        identity: Identity,
        input: CreateUserInput,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn update_user(
        &self,
        identity: Identity,
        input: UpdateUserInput,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn update_password(
        &self,
        identity: Identity,
        input: UpdatePasswordInput,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn update_user_picture(
        &self,
        identity: Identity,
        user_id: Uuid,
        file: UploadedFile,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn delete_user_picture(
        &self,
        identity: Identity,
        user_id: Uuid,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    /// Creates the initial admin unless a user with `email` already exists.
    fn bootstrap_admin(
        &self,
        email: String,
        password: String,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    fn get_by_id(&self, user_id: Uuid) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn get_by_email(&self, email: String) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    /// Looks a user up by username first, then by email.
    fn get_credentials(
        &self,
        login: String,
    ) -> impl Future<Output = Result<Option<UserCredentials>, CoreError>> + Send;

    fn get_password_hash(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<String>, CoreError>> + Send;

    /// Fails with `Conflict` when the username or email is taken.
    fn create_user(
        &self,
        user: User,
        password_hash: String,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn update_user(&self, user: User) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn update_password(
        &self,
        user_id: Uuid,
        password_hash: String,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn update_picture(
        &self,
        user_id: Uuid,
        img: Option<String>,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;
}
