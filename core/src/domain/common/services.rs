use std::sync::Arc;

/// Settings the services read at call time.
#[derive(Debug, Clone)]
pub struct ServiceSettings {
    pub session_ttl_hours: i64,
    pub notification_phone: Option<String>,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            session_ttl_hours: 24,
            notification_phone: None,
        }
    }
}

pub struct Service<P, PJ, A, RQ, U, H, T, HC, MS, N> {
    pub property_repository: Arc<P>,
    pub project_repository: Arc<PJ>,
    pub associate_repository: Arc<A>,
    pub request_repository: Arc<RQ>,
    pub user_repository: Arc<U>,
    pub hasher_repository: Arc<H>,
    pub token_issuer: Arc<T>,
    pub health_check_repository: Arc<HC>,
    pub media_storage: Arc<MS>,
    pub notifier: Arc<N>,
    pub settings: ServiceSettings,
}

impl<P, PJ, A, RQ, U, H, T, HC, MS, N> Clone for Service<P, PJ, A, RQ, U, H, T, HC, MS, N> {
    fn clone(&self) -> Self {
        Self {
            property_repository: Arc::clone(&self.property_repository),
            project_repository: Arc::clone(&self.project_repository),
            associate_repository: Arc::clone(&self.associate_repository),
            request_repository: Arc::clone(&self.request_repository),
            user_repository: Arc::clone(&self.user_repository),
            hasher_repository: Arc::clone(&self.hasher_repository),
            token_issuer: Arc::clone(&self.token_issuer),
            health_check_repository: Arc::clone(&self.health_check_repository),
            media_storage: Arc::clone(&self.media_storage),
            notifier: Arc::clone(&self.notifier),
            settings: self.settings.clone(),
        }
    }
}
