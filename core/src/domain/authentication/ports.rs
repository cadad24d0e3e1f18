use crate::domain::{
    authentication::{
        entities::{AuthSession, ProjectAccessClaims, SessionClaims},
        value_objects::{Identity, SignInInput},
    },
    common::entities::app_errors::CoreError,
    user::entities::User,
};

pub trait AuthService: Send + Sync {
    fn sign_in(
        &self,
        input: SignInInput,
    ) -> impl Future<Output = Result<AuthSession, CoreError>> + Send;

    /// Resolves a session token into the identity it was issued for.
    fn authenticate(&self, token: &str) -> Result<Identity, CoreError>;

    fn profile(&self, identity: Identity) -> impl Future<Output = Result<User, CoreError>> + Send;
}

/// Signs and verifies the HS256 tokens carried in cookies.
#[cfg_attr(test, mockall::automock)]
pub trait TokenIssuer: Send + Sync {
    fn sign_session(&self, claims: &SessionClaims) -> Result<String, CoreError>;

    fn verify_session(&self, token: &str) -> Result<SessionClaims, CoreError>;

    fn sign_project_access(&self, claims: &ProjectAccessClaims) -> Result<String, CoreError>;

    fn verify_project_access(&self, token: &str) -> Result<ProjectAccessClaims, CoreError>;
}
