use std::sync::Arc;

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, pagination::PageRequest},
    request::{entities::Request, ports::RequestRepository, value_objects::RequestFilter},
};
use crate::entity::requests::{
    ActiveModel as RequestActiveModel, Column as RequestColumn, Entity as RequestEntity,
};
use crate::infrastructure::request::conditions::filtered_query;

#[derive(Debug)]
pub struct PostgresRequestRepository {
    pub db: Arc<DatabaseConnection>,
}

impl PostgresRequestRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl RequestRepository for PostgresRequestRepository {
    async fn create_request(&self, request: Request) -> Result<Request, CoreError> {
        let created = RequestEntity::insert(RequestActiveModel::from(request))
            .exec_with_returning(self.db.as_ref())
            .await
            .map(Request::from)
            .map_err(|e| {
                error!("Failed to create request: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(created)
    }

    async fn get_by_id(&self, request_id: Uuid) -> Result<Option<Request>, CoreError> {
        let request = RequestEntity::find_by_id(request_id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to get request by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(Request::from);

        Ok(request)
    }

    async fn update_request(&self, request: Request) -> Result<Request, CoreError> {
        let updated = RequestEntity::update(RequestActiveModel::from(request))
            .exec(self.db.as_ref())
            .await
            .map(Request::from)
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => CoreError::NotFound,
                e => {
                    error!("Failed to update request: {}", e);
                    CoreError::InternalServerError
                }
            })?;

        Ok(updated)
    }

    async fn count(&self, filter: RequestFilter) -> Result<u64, CoreError> {
        filtered_query(&filter).count(self.db.as_ref()).await.map_err(|e| {
            error!("Failed to count requests: {}", e);
            CoreError::InternalServerError
        })
    }

    async fn find_page(
        &self,
        filter: RequestFilter,
        page: PageRequest,
    ) -> Result<Vec<Request>, CoreError> {
        let requests = filtered_query(&filter)
            .order_by_desc(RequestColumn::CreatedAt)
            .order_by_desc(RequestColumn::Id)
            .limit(page.limit())
            .offset(page.offset())
            .all(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to list requests: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(Request::from)
            .collect::<Vec<Request>>();

        Ok(requests)
    }
}
