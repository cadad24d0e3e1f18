use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tracing::info;

use crate::domain::{
    common::{SibraConfig, services::Service, services::ServiceSettings},
    user::ports::UserService,
};
use crate::infrastructure::{
    associate::repositories::associate_repository::PostgresAssociateRepository,
    crypto::argon2_hasher::Argon2Hasher,
    db::postgres::connect,
    health::repositories::health_check_repository::PostgresHealthCheckRepository,
    jwt::jwt_token_issuer::JwtTokenIssuer,
    notification::whatsapp_client::WhatsAppClient,
    project::repositories::project_repository::PostgresProjectRepository,
    property::repositories::property_repository::PostgresPropertyRepository,
    request::repositories::request_repository::PostgresRequestRepository,
    storage::local_media_storage::LocalMediaStorage,
    user::repositories::user_repository::PostgresUserRepository,
};

pub type SibraService = Service<
    PostgresPropertyRepository,
    PostgresProjectRepository,
    PostgresAssociateRepository,
    PostgresRequestRepository,
    PostgresUserRepository,
    Argon2Hasher,
    JwtTokenIssuer,
    PostgresHealthCheckRepository,
    LocalMediaStorage,
    WhatsAppClient,
>;

/// Wires every adapter around an already opened connection.
pub fn build_service(db: DatabaseConnection, config: &SibraConfig) -> SibraService {
    let db = Arc::new(db);

    Service {
        property_repository: Arc::new(PostgresPropertyRepository::new(db.clone())),
        project_repository: Arc::new(PostgresProjectRepository::new(db.clone())),
        associate_repository: Arc::new(PostgresAssociateRepository::new(db.clone())),
        request_repository: Arc::new(PostgresRequestRepository::new(db.clone())),
        user_repository: Arc::new(PostgresUserRepository::new(db.clone())),
        hasher_repository: Arc::new(Argon2Hasher::new()),
        token_issuer: Arc::new(JwtTokenIssuer::new(&config.auth.jwt_secret)),
        health_check_repository: Arc::new(PostgresHealthCheckRepository::new(db)),
        media_storage: Arc::new(LocalMediaStorage::new(&config.storage)),
        notifier: Arc::new(WhatsAppClient::new(&config.notification)),
        settings: ServiceSettings {
            session_ttl_hours: config.auth.session_ttl_hours,
            notification_phone: config.notification.notification_phone.clone(),
        },
    }
}

/// Connects, migrates, prepares media roots and bootstraps the admin account.
pub async fn create_service(config: SibraConfig) -> Result<SibraService, anyhow::Error> {
    let db = connect(&config.database).await?;
    let service = build_service(db, &config);

    service.media_storage.ensure_roots().await?;

    if let Some(admin) = &config.admin {
        let created = service
            .bootstrap_admin(admin.email.clone(), admin.password.clone())
            .await?;
        if created.is_none() {
            info!("Admin account already present");
        }
    }

    Ok(service)
}
