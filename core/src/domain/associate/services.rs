use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    associate::{
        entities::Associate,
        ports::{AssociateRepository, AssociateService},
        value_objects::AssociateInput,
    },
    authentication::{ports::TokenIssuer, value_objects::Identity},
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    notification::ports::Notifier,
    project::{policies::ensure_can_manage_projects, ports::ProjectRepository},
    property::ports::PropertyRepository,
    request::ports::RequestRepository,
    storage::ports::MediaStorage,
    user::ports::UserRepository,
};

impl<P, PJ, A, RQ, U, H, T, HC, MS, N> AssociateService for Service<P, PJ, A, RQ, U, H, T, HC, MS, N>
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
    #[instrument(skip(self, identity, input))]
    async fn create_associate(
        &self,
        identity: Identity,
        input: AssociateInput,
    ) -> Result<Associate, CoreError> {
        ensure_can_manage_projects(&identity)?;

        let associate = Associate::new(input)?;
        self.associate_repository.create_associate(associate).await
    }

    #[instrument(skip(self, identity, input))]
    async fn update_associate(
        &self,
        identity: Identity,
        associate_id: Uuid,
        input: AssociateInput,
    ) -> Result<Associate, CoreError> {
        ensure_can_manage_projects(&identity)?;

        let mut associate = self
            .associate_repository
            .get_by_id(associate_id)
            .await?
            .ok_or(CoreError::NotFound)?;
        associate.apply(input)?;

        self.associate_repository.update_associate(associate).await
    }

    #[instrument(skip(self, identity))]
    async fn delete_associate(&self, identity: Identity, associate_id: Uuid) -> Result<(), CoreError> {
        ensure_can_manage_projects(&identity)?;

        self.associate_repository
            .get_by_id(associate_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.associate_repository.delete_associate(associate_id).await
    }
}
