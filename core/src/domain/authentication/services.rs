use chrono::{DateTime, Utc};
use tracing::{info, instrument, warn};

use crate::domain::{
    associate::ports::AssociateRepository,
    authentication::{
        entities::{AuthSession, SessionClaims},
        ports::{AuthService, TokenIssuer},
        value_objects::{Identity, SignInInput},
    },
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    notification::ports::Notifier,
    project::ports::ProjectRepository,
    property::ports::PropertyRepository,
    request::ports::RequestRepository,
    storage::ports::MediaStorage,
    user::{entities::User, ports::UserRepository},
};

impl<P, PJ, A, RQ, U, H, T, HC, MS, N> AuthService for Service<P, PJ, A, RQ, U, H, T, HC, MS, N>
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
    #[instrument(skip(self, input), fields(login = %input.login))]
    async fn sign_in(&self, input: SignInInput) -> Result<AuthSession, CoreError> {
        let credentials = self
            .user_repository
            .get_credentials(input.login.clone())
            .await?
            .ok_or_else(|| {
                warn!("Sign in attempt for unknown login");
                CoreError::InvalidCredentials
            })?;

        if !self
            .hasher_repository
            .verify_password(&input.password, &credentials.password_hash)?
        {
            warn!("Sign in attempt with a wrong password");
            return Err(CoreError::InvalidCredentials);
        }

        let claims = SessionClaims::for_user(&credentials.user, self.settings.session_ttl_hours);
        let token = self.token_issuer.sign_session(&claims)?;
        let expires_at =
            DateTime::<Utc>::from_timestamp(claims.exp, 0).ok_or(CoreError::InternalServerError)?;

        info!(user_id = %credentials.user.id, "User signed in");

        Ok(AuthSession {
            token,
            expires_at,
            user: credentials.user,
        })
    }

    fn authenticate(&self, token: &str) -> Result<Identity, CoreError> {
        self.token_issuer
            .verify_session(token)
            .map(Identity::from)
            .map_err(|_| CoreError::Unauthorized)
    }

    async fn profile(&self, identity: Identity) -> Result<User, CoreError> {
        self.user_repository
            .get_by_id(identity.id)
            .await?
            .ok_or(CoreError::NotFound)
    }
}
