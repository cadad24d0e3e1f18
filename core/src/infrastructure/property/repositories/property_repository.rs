use std::sync::Arc;

use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, Order, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, pagination::PageRequest},
    property::{
        entities::Property,
        ports::PropertyRepository,
        value_objects::{PropertyFilter, Proximity},
    },
};
use crate::entity::{
    properties::{
        ActiveModel as PropertyActiveModel, Column as PropertyColumn, Entity as PropertyEntity,
        Model as PropertyModel,
    },
    users::Entity as UserEntity,
};
use crate::infrastructure::property::{
    conditions::{distance_expr, filtered_query, page_query, proximity_expr},
    mappers::property_with_agent,
};

fn map_write_error(action: &str, e: sea_orm::DbErr) -> CoreError {
    if let Some(sea_orm::SqlErr::UniqueConstraintViolation(detail)) = e.sql_err() {
        return CoreError::Conflict(format!("a property with the same slug exists: {detail}"));
    }

    error!("Failed to {} property: {}", action, e);
    CoreError::InternalServerError
}

#[derive(Debug)]
pub struct PostgresPropertyRepository {
    pub db: Arc<DatabaseConnection>,
}

impl PostgresPropertyRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn attach_agent(&self, model: Option<PropertyModel>) -> Result<Option<Property>, CoreError> {
        let Some(model) = model else {
            return Ok(None);
        };

        let agent = match model.agent {
            Some(agent_id) => UserEntity::find_by_id(agent_id)
                .one(self.db.as_ref())
                .await
                .map_err(|e| {
                    error!("Failed to load property agent: {}", e);
                    CoreError::InternalServerError
                })?,
            None => None,
        };

        Ok(Some(property_with_agent(model, agent)))
    }
}

impl PropertyRepository for PostgresPropertyRepository {
    async fn count(&self, filter: PropertyFilter) -> Result<u64, CoreError> {
        filtered_query(&filter).count(self.db.as_ref()).await.map_err(|e| {
            error!("Failed to count properties: {}", e);
            CoreError::InternalServerError
        })
    }

    async fn find_page(
        &self,
        filter: PropertyFilter,
        page: PageRequest,
    ) -> Result<Vec<Property>, CoreError> {
        let properties = page_query(&filter, page)
            .all(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to search properties: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(Property::from)
            .collect::<Vec<Property>>();

        Ok(properties)
    }

    async fn find_featured(&self, limit: u64) -> Result<Vec<Property>, CoreError> {
        let properties = PropertyEntity::find()
            .filter(PropertyColumn::Featured.eq(true))
            .order_by_desc(PropertyColumn::ListingDate)
            .limit(limit)
            .all(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to fetch featured properties: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(Property::from)
            .collect::<Vec<Property>>();

        Ok(properties)
    }

    async fn get_by_id(&self, property_id: Uuid) -> Result<Option<Property>, CoreError> {
        let model = PropertyEntity::find_by_id(property_id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to get property by id: {}", e);
                CoreError::InternalServerError
            })?;

        self.attach_agent(model).await
    }

    async fn get_by_slug(&self, slug: String) -> Result<Option<Property>, CoreError> {
        let model = PropertyEntity::find()
            .filter(PropertyColumn::Slug.eq(slug))
            .one(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to get property by slug: {}", e);
                CoreError::InternalServerError
            })?;

        self.attach_agent(model).await
    }

    async fn find_nearby(
        &self,
        origin: Property,
        radius_meters: f64,
        limit: u64,
    ) -> Result<Vec<Property>, CoreError> {
        let proximity = Proximity {
            lat: origin.lat,
            lon: origin.lon,
            radius_meters,
        };

        let properties = PropertyEntity::find()
            .filter(PropertyColumn::Contract.eq(origin.contract.as_str()))
            .filter(PropertyColumn::Id.ne(origin.id))
            .filter(proximity_expr(proximity))
            .order_by(distance_expr(origin.lat, origin.lon), Order::Asc)
            .limit(limit)
            .all(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to fetch nearby properties: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(Property::from)
            .collect::<Vec<Property>>();

        Ok(properties)
    }

    async fn create_property(&self, property: Property) -> Result<Property, CoreError> {
        let agent_data = property.agent_data.clone();

        let created = PropertyEntity::insert(PropertyActiveModel::from(property))
            .exec_with_returning(self.db.as_ref())
            .await
            .map_err(|e| map_write_error("create", e))?;

        Ok(Property {
            agent_data,
            ..Property::from(created)
        })
    }

    async fn update_property(&self, property: Property) -> Result<Property, CoreError> {
        let agent_data = property.agent_data.clone();

        let updated = PropertyEntity::update(PropertyActiveModel::from(property))
            .exec(self.db.as_ref())
            .await
            .map_err(|e| match e {
                sea_orm::DbErr::RecordNotUpdated => CoreError::NotFound,
                e => map_write_error("update", e),
            })?;

        Ok(Property {
            agent_data,
            ..Property::from(updated)
        })
    }

    async fn delete_property(&self, property_id: Uuid) -> Result<(), CoreError> {
        let result = PropertyEntity::delete_by_id(property_id)
            .exec(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to delete property: {}", e);
                CoreError::InternalServerError
            })?;

        if result.rows_affected == 0 {
            return Err(CoreError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, TryIntoModel, Value};

    use super::*;
    use crate::domain::{
        common::test_support::{listing, property_input},
        property::value_objects::PropertySearch,
    };
    use crate::entity::users::Model as UserModel;

    fn model(contract: &str, price: f64) -> PropertyModel {
        let property = listing(Uuid::new_v4(), property_input(contract, price, "Monterrey"), 0);
        PropertyActiveModel::from(property).try_into_model().unwrap()
    }

    fn count_row(total: i64) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([("num_items", Value::BigInt(Some(total)))])
    }

    #[tokio::test]
    async fn test_count_and_page_share_predicates() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![count_row(25)]])
            .append_query_results([vec![model("venta", 600_000.0), model("venta", 700_000.0)]])
            .into_connection();
        let repository = PostgresPropertyRepository::new(Arc::new(db));

        let search = PropertySearch::from_pairs([
            ("contract", "venta"),
            ("minPrice", "500000"),
            ("city", "Monterrey"),
            ("page", "2"),
        ]);

        let total = repository.count(search.filter.clone()).await.unwrap();
        let rows = repository
            .find_page(search.filter, search.page)
            .await
            .unwrap();
        assert_eq!(total, 25);
        assert_eq!(rows.len(), 2);

        let log = Arc::try_unwrap(repository.db)
            .unwrap()
            .into_transaction_log();
        assert_eq!(log.len(), 2);

        let where_clause = r#"WHERE "properties"."contract" = $1 AND "properties"."price" >= $2 AND "properties"."city" = $3"#;
        let count_sql = &log[0].statements()[0].sql;
        let page_sql = &log[1].statements()[0].sql;
        assert!(count_sql.contains(where_clause));
        assert!(page_sql.contains(where_clause));
        assert!(page_sql.contains("LIMIT $4 OFFSET $5"));
    }

    #[tokio::test]
    async fn test_get_by_id_attaches_agent() {
        let agent_id = Uuid::new_v4();
        let mut property = model("renta", 15_000.0);
        property.agent = Some(agent_id);
        let now = chrono::Utc::now().fixed_offset();

        let agent = UserModel {
            id: agent_id,
            name: "Laura".to_string(),
            lastname: "Garza".to_string(),
            username: "lgarza".to_string(),
            email: "laura@sibra.mx".to_string(),
            phone: Some("8112223344".to_string()),
            password: "hash".to_string(),
            role: "editor".to_string(),
            email_verified: true,
            phone_verified: false,
            img: None,
            created_at: now,
            updated_at: now,
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![property.clone()]])
            .append_query_results([vec![agent]])
            .into_connection();
        let repository = PostgresPropertyRepository::new(Arc::new(db));

        let found = repository.get_by_id(property.id).await.unwrap().unwrap();
        let agent_data = found.agent_data.unwrap();
        assert_eq!(agent_data.name, "Laura Garza");
        assert_eq!(agent_data.phone, "8112223344");
        assert_eq!(agent_data.img, "");
    }

    #[tokio::test]
    async fn test_get_by_slug_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<PropertyModel>::new()])
            .into_connection();
        let repository = PostgresPropertyRepository::new(Arc::new(db));

        let found = repository.get_by_slug("no-existe".to_string()).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_nearby_excludes_origin_and_orders_by_distance() {
        let origin = Property::from(model("venta", 1_000_000.0));
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model("venta", 900_000.0)]])
            .into_connection();
        let repository = PostgresPropertyRepository::new(Arc::new(db));

        let rows = repository.find_nearby(origin, 2000.0, 10).await.unwrap();
        assert_eq!(rows.len(), 1);

        let log = Arc::try_unwrap(repository.db)
            .unwrap()
            .into_transaction_log();
        let sql = &log[0].statements()[0].sql;
        assert!(sql.contains(r#""properties"."id" <> $2"#));
        assert!(sql.contains(r#"ORDER BY ("properties"."earth_coords" <@> point($6, $7)) * 1609.344 ASC"#));
    }

    #[tokio::test]
    async fn test_delete_missing_property() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();
        let repository = PostgresPropertyRepository::new(Arc::new(db));

        assert_eq!(
            repository.delete_property(Uuid::new_v4()).await,
            Err(CoreError::NotFound)
        );
    }
}
