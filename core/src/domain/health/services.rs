use crate::domain::{
    associate::ports::AssociateRepository,
    authentication::ports::TokenIssuer,
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    notification::ports::Notifier,
    project::ports::ProjectRepository,
    property::ports::PropertyRepository,
    request::ports::RequestRepository,
    storage::ports::MediaStorage,
    user::ports::UserRepository,
};

impl<P, PJ, A, RQ, U, H, T, HC, MS, N> HealthCheckService
    for Service<P, PJ, A, RQ, U, H, T, HC, MS, N>
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
    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readiness().await
    }
}
