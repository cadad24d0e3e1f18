use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::user::entities::Role;

use super::entities::SessionClaims;

/// The authenticated caller behind a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Identity {
    pub id: Uuid,
    pub username: String,
    pub fullname: String,
    pub role: Role,
}

impl Identity {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn has_access(&self, level: Role) -> bool {
        self.role >= level
    }

    /// Owners may act on their own records, admins on anyone's.
    pub fn can_act_on(&self, owner: Option<Uuid>) -> bool {
        self.has_access(Role::Admin) || owner == Some(self.id)
    }
}

impl From<SessionClaims> for Identity {
    fn from(claims: SessionClaims) -> Self {
        Self {
            id: claims.id,
            username: claims.username,
            fullname: claims.fullname,
            role: Role::parse_lossy(&claims.role),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SignInInput {
    pub login: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectAccessInput {
    pub id_code: String,
    pub lot_num: String,
    pub apple_num: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(role: Role) -> Identity {
        Identity {
            id: Uuid::new_v4(),
            username: "agente".to_string(),
            fullname: "Agente Sibra".to_string(),
            role,
        }
    }

    #[test]
    fn test_has_access() {
        assert!(identity(Role::Admin).has_access(Role::Editor));
        assert!(identity(Role::Editor).has_access(Role::Editor));
        assert!(!identity(Role::User).has_access(Role::Editor));
    }

    #[test]
    fn test_can_act_on() {
        let editor = identity(Role::Editor);
        assert!(editor.can_act_on(Some(editor.id)));
        assert!(!editor.can_act_on(Some(Uuid::new_v4())));
        assert!(!editor.can_act_on(None));
        assert!(identity(Role::Admin).can_act_on(Some(Uuid::new_v4())));
    }

    #[test]
    fn test_from_claims_with_unknown_role() {
        let claims = SessionClaims {
            id: Uuid::new_v4(),
            username: "x".to_string(),
            fullname: "X".to_string(),
            role: "root".to_string(),
            exp: 0,
        };

        assert_eq!(Identity::from(claims).role, Role::User);
    }
}
