use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::{entities::app_errors::CoreError, generate_uuid_v7};

use super::value_objects::AssociateInput;

/// A person holding lots inside a development, identified by RFC or CURP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Associate {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub rfc: String,
    pub curp: String,
}

impl Associate {
    pub fn new(input: AssociateInput) -> Result<Self, CoreError> {
        let associate = Self {
            id: generate_uuid_v7(),
            name: input.name,
            phone: input.phone,
            rfc: input.rfc,
            curp: input.curp,
        };
        associate.ensure_identified()?;

        Ok(associate)
    }

    pub fn apply(&mut self, input: AssociateInput) -> Result<(), CoreError> {
        self.name = input.name;
        self.phone = input.phone;
        self.rfc = input.rfc;
        self.curp = input.curp;
        self.ensure_identified()
    }

    pub fn ensure_identified(&self) -> Result<(), CoreError> {
        if self.rfc.trim().is_empty() && self.curp.trim().is_empty() {
            return Err(CoreError::MissingAssociateIdentifier);
        }

        Ok(())
    }

    pub fn matches_code(&self, id_code: &str) -> bool {
        !id_code.is_empty() && (self.rfc == id_code || self.curp == id_code)
    }
}

/// An associate as seen from one project, with its lot and payment data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProjectAssociate {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub rfc: String,
    pub curp: String,
    pub lot_num: String,
    pub apple_num: String,
    pub pending_payment: bool,
}

impl ProjectAssociate {
    pub fn new(associate: Associate, lot_num: String, apple_num: String, pending_payment: bool) -> Self {
        Self {
            id: associate.id,
            name: associate.name,
            phone: associate.phone,
            rfc: associate.rfc,
            curp: associate.curp,
            lot_num,
            apple_num,
            pending_payment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(rfc: &str, curp: &str) -> AssociateInput {
        AssociateInput {
            name: "Luis Garza".to_string(),
            phone: "8112345678".to_string(),
            rfc: rfc.to_string(),
            curp: curp.to_string(),
        }
    }

    #[test]
    fn test_requires_rfc_or_curp() {
        assert_eq!(
            Associate::new(input("", " ")),
            Err(CoreError::MissingAssociateIdentifier)
        );
        assert!(Associate::new(input("GAGL800101AB1", "")).is_ok());
        assert!(Associate::new(input("", "GAGL800101HNLRRS09")).is_ok());
    }

    #[test]
    fn test_matches_code() {
        let associate = Associate::new(input("GAGL800101AB1", "GAGL800101HNLRRS09")).unwrap();

        assert!(associate.matches_code("GAGL800101AB1"));
        assert!(associate.matches_code("GAGL800101HNLRRS09"));
        assert!(!associate.matches_code(""));
        assert!(!associate.matches_code("OTRO"));
    }
}
