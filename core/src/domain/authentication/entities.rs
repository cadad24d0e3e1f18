use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{associate::entities::ProjectAssociate, user::entities::User};

pub const SESSION_COOKIE: &str = "auth_token";
pub const PROJECT_ACCESS_COOKIE: &str = "project_auth";
pub const PROJECT_ACCESS_TTL_HOURS: i64 = 24;

/// Claims of the admin panel session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    #[serde(rename = "Id")]
    pub id: Uuid,
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "Fullname")]
    pub fullname: String,
    #[serde(rename = "Role")]
    pub role: String,
    pub exp: i64,
}

impl SessionClaims {
    pub fn for_user(user: &User, ttl_hours: i64) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            fullname: user.fullname(),
            role: user.role.as_str().to_string(),
            exp: (Utc::now() + Duration::hours(ttl_hours)).timestamp(),
        }
    }
}

/// Claims granting an associate read access to a project's documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectAccessClaims {
    #[serde(rename = "ProjectID")]
    pub project_id: Uuid,
    #[serde(rename = "AssociateID")]
    pub associate_id: Uuid,
    #[serde(rename = "IDCode")]
    pub id_code: String,
    #[serde(rename = "LotNum")]
    pub lot_num: String,
    #[serde(rename = "AppleNum")]
    pub apple_num: String,
    pub exp: i64,
}

#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub user: User,
}

#[derive(Debug, Clone)]
pub struct ProjectAccessGrant {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub associate: ProjectAssociate,
}
