use serde::{Deserialize, Serialize};
use sibra_core::domain::{
    associate::value_objects::{AssociateInput, AssociateLinkInput, NewProjectAssociate},
    authentication::value_objects::ProjectAccessInput,
    project::value_objects::{CreateProjectInput, UpdateProjectInput},
};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ProjectAssociateValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[serde(default)]
    pub phone: String,

    #[serde(default)]
    pub rfc: String,

    #[serde(default)]
    pub curp: String,

    #[serde(default)]
    pub lot_num: String,

    #[serde(default)]
    pub apple_num: String,

    #[serde(default)]
    pub pending_payment: bool,
}

impl From<ProjectAssociateValidator> for NewProjectAssociate {
    fn from(payload: ProjectAssociateValidator) -> Self {
        NewProjectAssociate {
            associate: AssociateInput {
                name: payload.name,
                phone: payload.phone,
                rfc: payload.rfc,
                curp: payload.curp,
            },
            link: AssociateLinkInput {
                lot_num: payload.lot_num,
                apple_num: payload.apple_num,
                pending_payment: payload.pending_payment,
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProjectValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    #[validate(nested)]
    pub associates: Vec<ProjectAssociateValidator>,
}

impl From<CreateProjectValidator> for CreateProjectInput {
    fn from(payload: CreateProjectValidator) -> Self {
        CreateProjectInput {
            name: payload.name,
            description: payload.description,
            associates: payload.associates.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProjectValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[serde(default)]
    pub description: String,
}

impl From<UpdateProjectValidator> for UpdateProjectInput {
    fn from(payload: UpdateProjectValidator) -> Self {
        UpdateProjectInput {
            name: payload.name,
            description: payload.description,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct AssociateLinkValidator {
    #[serde(default)]
    pub lot_num: String,

    #[serde(default)]
    pub apple_num: String,

    #[serde(default)]
    pub pending_payment: bool,
}

impl From<AssociateLinkValidator> for AssociateLinkInput {
    fn from(payload: AssociateLinkValidator) -> Self {
        AssociateLinkInput {
            lot_num: payload.lot_num,
            apple_num: payload.apple_num,
            pending_payment: payload.pending_payment,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateAssociateLinkValidator {
    pub pending_payment: bool,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectAccessValidator {
    /// RFC or CURP of the associate.
    #[serde(rename = "idcode")]
    #[validate(length(min = 1, message = "RFC or CURP is required"))]
    pub id_code: String,

    #[serde(default)]
    pub lot_num: String,

    #[serde(default)]
    pub apple_num: String,
}

impl From<ProjectAccessValidator> for ProjectAccessInput {
    fn from(payload: ProjectAccessValidator) -> Self {
        ProjectAccessInput {
            id_code: payload.id_code.trim().to_string(),
            lot_num: payload.lot_num.trim().to_string(),
            apple_num: payload.apple_num.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_body_field_names() {
        let payload: ProjectAccessValidator = serde_json::from_value(serde_json::json!({
            "idcode": " GAGL800101AB1 ",
            "lotNum": "12",
            "appleNum": "3"
        }))
        .unwrap();

        let input = ProjectAccessInput::from(payload);
        assert_eq!(input.id_code, "GAGL800101AB1");
        assert_eq!(input.lot_num, "12");
        assert_eq!(input.apple_num, "3");
    }

    #[test]
    fn test_nested_associates_are_validated() {
        let payload: CreateProjectValidator = serde_json::from_value(serde_json::json!({
            "name": "Conquistadores",
            "associates": [{ "name": "", "rfc": "GAGL800101AB1" }]
        }))
        .unwrap();

        assert!(payload.validate().is_err());
    }
}
