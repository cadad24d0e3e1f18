use std::{sync::Arc, time::Instant};

use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::domain::{
    common::entities::app_errors::CoreError,
    health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
};
use crate::infrastructure::db::postgres::unavailable;

#[derive(Debug)]
pub struct PostgresHealthCheckRepository {
    pub db: Arc<DatabaseConnection>,
}

impl PostgresHealthCheckRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl HealthCheckRepository for PostgresHealthCheckRepository {
    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        let started = Instant::now();
        self.db
            .execute_unprepared("SELECT 1")
            .await
            .map_err(unavailable)?;

        Ok(DatabaseHealthStatus::up(started.elapsed().as_millis() as u64))
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    use super::*;

    #[tokio::test]
    async fn test_readiness_pings_database() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();
        let repository = PostgresHealthCheckRepository::new(Arc::new(db));

        let status = repository.readiness().await.unwrap();
        assert_eq!(status.status, "up");
    }
}
