use serde::{Deserialize, Serialize};
use sibra_core::domain::associate::value_objects::AssociateInput;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// RFC or CURP must be present, the other may stay empty.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_identifier"))]
pub struct AssociateValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[serde(default)]
    pub phone: String,

    #[serde(default)]
    pub rfc: String,

    #[serde(default)]
    pub curp: String,
}

fn validate_identifier(associate: &AssociateValidator) -> Result<(), ValidationError> {
    if associate.rfc.trim().is_empty() && associate.curp.trim().is_empty() {
        let mut error = ValidationError::new("missing_identifier");
        error.message = Some("RFC or CURP must be set".into());
        return Err(error);
    }

    Ok(())
}

impl From<AssociateValidator> for AssociateInput {
    fn from(value: AssociateValidator) -> Self {
        AssociateInput {
            name: value.name.trim().to_string(),
            phone: value.phone.trim().to_string(),
            rfc: value.rfc.trim().to_string(),
            curp: value.curp.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn associate(rfc: &str, curp: &str) -> AssociateValidator {
        AssociateValidator {
            name: "Rosa Garza".to_string(),
            phone: "8112345678".to_string(),
            rfc: rfc.to_string(),
            curp: curp.to_string(),
        }
    }

    #[test]
    fn test_requires_rfc_or_curp() {
        assert!(associate("", " ").validate().is_err());
        assert!(associate("GARR800101AB1", "").validate().is_ok());
        assert!(associate("", "GARR800101MNLRSS09").validate().is_ok());
    }

    #[test]
    fn test_into_input_trims_identifiers() {
        let input: AssociateInput = associate(" GARR800101AB1 ", "").into();

        assert_eq!(input.rfc, "GARR800101AB1");
        assert_eq!(input.curp, "");
    }
}
