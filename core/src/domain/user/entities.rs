use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_uuid_v7;

/// Roles ordered by access level, `User < Editor < Admin`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Editor,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Editor => "editor",
            Role::Admin => "admin",
        }
    }

    /// Unknown roles map to the lowest access level.
    pub fn parse_lossy(value: &str) -> Self {
        match value {
            "admin" => Role::Admin,
            "editor" => Role::Editor,
            _ => Role::User,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub lastname: String,
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: Role,
    pub email_verified: bool,
    pub phone_verified: bool,
    pub img: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct UserConfig {
    pub name: String,
    pub lastname: String,
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: Role,
    pub email_verified: bool,
}

impl User {
    pub fn new(config: UserConfig) -> Self {
        let now = Utc::now();

        Self {
            id: generate_uuid_v7(),
            name: config.name,
            lastname: config.lastname,
            username: config.username,
            email: config.email,
            phone: config.phone,
            role: config.role,
            email_verified: config.email_verified,
            phone_verified: false,
            img: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn fullname(&self) -> String {
        format!("{} {}", self.name, self.lastname).trim().to_string()
    }
}

/// A user together with its stored password hash. Never leaves the core.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_ordering() {
        assert!(Role::User < Role::Editor);
        assert!(Role::Editor < Role::Admin);
    }

    #[test]
    fn test_unknown_role_is_user() {
        assert_eq!(Role::parse_lossy("superuser"), Role::User);
        assert_eq!(Role::parse_lossy("editor"), Role::Editor);
    }

    #[test]
    fn test_user_serialization_has_no_password() {
        let user = User::new(UserConfig {
            name: "Ana".to_string(),
            lastname: "Ruiz".to_string(),
            username: "aruiz".to_string(),
            email: "ana@sibra.mx".to_string(),
            phone: None,
            role: Role::Editor,
            email_verified: true,
        });

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["role"], "editor");
        assert_eq!(json["emailVerified"], true);
        assert!(json.get("password").is_none());
        assert_eq!(user.fullname(), "Ana Ruiz");
    }
}
