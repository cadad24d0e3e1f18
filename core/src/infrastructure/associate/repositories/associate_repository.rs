use std::sync::Arc;

use sea_orm::{DatabaseConnection, DbErr, EntityTrait};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    associate::{entities::Associate, ports::AssociateRepository},
    common::entities::app_errors::CoreError,
};
use crate::entity::associates::{ActiveModel as AssociateActiveModel, Entity as AssociateEntity};

#[derive(Debug)]
pub struct PostgresAssociateRepository {
    pub db: Arc<DatabaseConnection>,
}

impl PostgresAssociateRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl AssociateRepository for PostgresAssociateRepository {
    async fn get_by_id(&self, associate_id: Uuid) -> Result<Option<Associate>, CoreError> {
        let associate = AssociateEntity::find_by_id(associate_id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to get associate by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(Associate::from);

        Ok(associate)
    }

    async fn create_associate(&self, associate: Associate) -> Result<Associate, CoreError> {
        let created = AssociateEntity::insert(AssociateActiveModel::from(associate))
            .exec_with_returning(self.db.as_ref())
            .await
            .map(Associate::from)
            .map_err(|e| {
                error!("Failed to create associate: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(created)
    }

    async fn update_associate(&self, associate: Associate) -> Result<Associate, CoreError> {
        let updated = AssociateEntity::update(AssociateActiveModel::from(associate))
            .exec(self.db.as_ref())
            .await
            .map(Associate::from)
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => CoreError::NotFound,
                e => {
                    error!("Failed to update associate: {}", e);
                    CoreError::InternalServerError
                }
            })?;

        Ok(updated)
    }

    async fn delete_associate(&self, associate_id: Uuid) -> Result<(), CoreError> {
        let result = AssociateEntity::delete_by_id(associate_id)
            .exec(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to delete associate: {}", e);
                CoreError::InternalServerError
            })?;

        if result.rows_affected == 0 {
            return Err(CoreError::NotFound);
        }

        Ok(())
    }
}
