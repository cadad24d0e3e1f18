use uuid::Uuid;

use crate::domain::{
    associate::{entities::Associate, value_objects::AssociateInput},
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
};

pub trait AssociateService: Send + Sync {
    fn create_associate(
        &self,
        identity: Identity,
        input: AssociateInput,
    ) -> impl Future<Output = Result<Associate, CoreError>> + Send;

    fn update_associate(
        &self,
        identity: Identity,
        associate_id: Uuid,
        input: AssociateInput,
    ) -> impl Future<Output = Result<Associate, CoreError>> + Send;

    fn delete_associate(
        &self,
        identity: Identity,
        associate_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait AssociateRepository: Send + Sync {
    fn get_by_id(
        &self,
        associate_id: Uuid,
    ) -> impl Future<Output = Result<Option<Associate>, CoreError>> + Send;

    fn create_associate(
        &self,
        associate: Associate,
    ) -> impl Future<Output = Result<Associate, CoreError>> + Send;

    fn update_associate(
        &self,
        associate: Associate,
    ) -> impl Future<Output = Result<Associate, CoreError>> + Send;

    /// Removing an associate also drops its project links.
    fn delete_associate(
        &self,
        associate_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
