use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{error, info};

use crate::domain::common::{DatabaseConfig, entities::app_errors::CoreError};

/// Opens the pool and applies the embedded migrations.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, anyhow::Error> {
    let timeout = Duration::from_secs(config.timeout_secs);
    let statement_timeout = format!("{}s", config.timeout_secs);

    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .connect_timeout(timeout)
        .acquire_timeout(timeout)
        .sqlx_logging(false)
        .map_sqlx_postgres_opts(move |opts| {
            opts.options([("statement_timeout", statement_timeout.as_str())])
        });

    let db = Database::connect(options).await?;
    info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(db.get_postgres_connection_pool())
        .await?;
    info!("Database migrations applied");

    Ok(db)
}

pub fn unavailable(e: sea_orm::DbErr) -> CoreError {
    error!("Database unavailable: {}", e);
    CoreError::InternalServerError
}
