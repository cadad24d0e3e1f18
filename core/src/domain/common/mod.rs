use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod pagination;
pub mod policies;
pub mod services;
#[cfg(test)]
pub mod test_support;

#[derive(Clone, Debug)]
pub struct SibraConfig {
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub storage: StorageConfig,
    pub notification: NotificationConfig,
    pub admin: Option<AdminBootstrapConfig>,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub timeout_secs: u64,
}

#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub session_ttl_hours: i64,
}

#[derive(Clone, Debug)]
pub struct StorageConfig {
    /// Root for project media and documents.
    pub uploads_path: String,
    /// Root served under `/static`, holds `properties/` and `users/`.
    pub static_path: String,
}

#[derive(Clone, Debug, Default)]
pub struct NotificationConfig {
    pub notification_phone: Option<String>,
    pub phone_number_id: Option<String>,
    pub access_token: Option<String>,
    pub api_version: String,
}

#[derive(Clone, Debug)]
pub struct AdminBootstrapConfig {
    pub email: String,
    pub password: String,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}

/// Turns free text into a lowercase, dash separated slug.
///
/// Every run of characters outside `[a-zA-Z0-9]` collapses into a single dash and
/// leading or trailing separators are dropped.
pub fn slugify(input: &str) -> String {
    input
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(|part| part.to_ascii_lowercase())
        .collect::<Vec<String>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_collapses_separators() {
        assert_eq!(
            slugify("venta  Av. Constitución #123, Centro"),
            "venta-av-constituci-n-123-centro"
        );
    }

    #[test]
    fn test_slugify_trims_edges() {
        assert_eq!(slugify("  --Las Palmas 2024-- "), "las-palmas-2024");
        assert_eq!(slugify("***"), "");
    }

    #[test]
    fn test_uuid_v7_is_time_ordered() {
        let first = generate_uuid_v7();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let second = generate_uuid_v7();

        assert_eq!(first.get_version_num(), 7);
        assert!(first < second);
    }
}
