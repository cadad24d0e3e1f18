use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::{
    associate::ports::AssociateRepository,
    authentication::{ports::TokenIssuer, value_objects::Identity},
    common::{entities::app_errors::CoreError, policies::ensure_policy, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    notification::ports::Notifier,
    project::ports::ProjectRepository,
    property::ports::PropertyRepository,
    request::ports::RequestRepository,
    storage::{entities::UploadedFile, ports::MediaStorage, value_objects::MediaArea},
    user::{
        entities::{Role, User, UserConfig},
        ports::{UserRepository, UserService},
        value_objects::{CreateUserInput, UpdatePasswordInput, UpdateUserInput},
    },
};

fn ensure_self_or_admin(identity: &Identity, user_id: Uuid) -> Result<(), CoreError> {
    ensure_policy(
        identity.can_act_on(Some(user_id)),
        "only the account owner or an admin can modify this user",
    )
}

fn required(value: &str, field: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::InvalidInput(format!("{field} is required")));
    }
    Ok(())
}

impl<P, PJ, A, RQ, U, H, T, HC, MS, N> Service<P, PJ, A, RQ, U, H, T, HC, MS, N>
where
    U: UserRepository,
{
    async fn load_user(&self, user_id: Uuid) -> Result<User, CoreError> {
        self.user_repository
            .get_by_id(user_id)
            .await?
            .ok_or(CoreError::NotFound)
    }
}

impl<P, PJ, A, RQ, U, H, T, HC, MS, N> UserService for Service<P, PJ, A, RQ, U, H, T, HC, MS, N>
where
    P: PropertyRepository,
    PJ: ProjectRepository,
    A: AssociateRepository,
    RQ: RequestRepository,
    U: UserRepository,
    H: HasherRepository,
    T: TokenIssuer,
    HC: HealthCheckRepository,
    MS: MediaStorage,
    N: Notifier,
{
    #[instrument(skip(self, identity, input), fields(created_by = %identity.id, username = %input.username))]
    async fn create_user(
        &self,
        identity: Identity,
        input: CreateUserInput,
    ) -> Result<User, CoreError> {
        ensure_policy(
            identity.has_access(Role::Admin),
            "admin access required to create users",
        )?;
        required(&input.name, "name")?;
        required(&input.username, "username")?;
        required(&input.email, "email")?;
        required(&input.password, "password")?;

        let user = User::new(UserConfig {
            name: input.name,
            lastname: input.lastname,
            username: input.username,
            email: input.email,
            phone: input.phone,
            role: input.role.unwrap_or_default(),
            email_verified: false,
        });
        let hash = self.hasher_repository.hash_password(&input.password)?;

        let user = self.user_repository.create_user(user, hash).await?;
        info!(user_id = %user.id, role = %user.role, "User created");

        Ok(user)
    }

    #[instrument(skip(self, identity, input), fields(user_id = %input.user_id))]
    async fn update_user(&self, identity: Identity, input: UpdateUserInput) -> Result<User, CoreError> {
        ensure_self_or_admin(&identity, input.user_id)?;
        required(&input.name, "name")?;
        required(&input.email, "email")?;

        let mut user = self.load_user(input.user_id).await?;
        user.name = input.name;
        user.lastname = input.lastname;
        user.email = input.email;
        user.phone = input.phone.filter(|phone| !phone.trim().is_empty());
        user.updated_at = chrono::Utc::now();

        self.user_repository.update_user(user).await
    }

    #[instrument(skip(self, identity, input), fields(user_id = %input.user_id))]
    async fn update_password(
        &self,
        identity: Identity,
        input: UpdatePasswordInput,
    ) -> Result<(), CoreError> {
        ensure_self_or_admin(&identity, input.user_id)?;
        required(&input.new_password, "new password")?;

        if input.new_password != input.confirm_password {
            return Err(CoreError::InvalidInput(
                "password confirmation does not match".to_string(),
            ));
        }

        let current_hash = self
            .user_repository
            .get_password_hash(input.user_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        if !self
            .hasher_repository
            .verify_password(&input.current_password, &current_hash)?
        {
            return Err(CoreError::InvalidCredentials);
        }

        let hash = self.hasher_repository.hash_password(&input.new_password)?;
        self.user_repository
            .update_password(input.user_id, hash)
            .await
    }

    #[instrument(skip(self, identity, file), fields(size = file.size()))]
    async fn update_user_picture(
        &self,
        identity: Identity,
        user_id: Uuid,
        file: UploadedFile,
    ) -> Result<User, CoreError> {
        ensure_self_or_admin(&identity, user_id)?;
        let user = self.load_user(user_id).await?;

        let name = format!("{user_id}{}", file.extension());
        if let Some(previous) = user.img.as_deref().filter(|img| *img != name) {
            self.media_storage.delete(MediaArea::Users, previous).await?;
        }

        self.media_storage
            .put(MediaArea::Users, &name, file.data)
            .await?;

        self.user_repository.update_picture(user_id, Some(name)).await
    }

    async fn delete_user_picture(&self, identity: Identity, user_id: Uuid) -> Result<User, CoreError> {
        ensure_self_or_admin(&identity, user_id)?;
        let user = self.load_user(user_id).await?;

        if let Some(img) = user.img.as_deref() {
            self.media_storage.delete(MediaArea::Users, img).await?;
        }

        self.user_repository.update_picture(user_id, None).await
    }

    #[instrument(skip(self, password))]
    async fn bootstrap_admin(&self, email: String, password: String) -> Result<Option<User>, CoreError> {
        if self.user_repository.get_by_email(email.clone()).await?.is_some() {
            return Ok(None);
        }

        let admin = User::new(UserConfig {
            name: "admin".to_string(),
            lastname: String::new(),
            username: "admin".to_string(),
            email,
            phone: None,
            role: Role::Admin,
            email_verified: true,
        });
        let hash = self.hasher_repository.hash_password(&password)?;

        let admin = self.user_repository.create_user(admin, hash).await?;
        info!(user_id = %admin.id, "Admin account bootstrapped");

        Ok(Some(admin))
    }
}
