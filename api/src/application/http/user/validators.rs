use serde::{Deserialize, Serialize};
use sibra_core::domain::user::entities::Role;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[serde(default)]
    pub lastname: String,

    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,

    #[validate(email(message = "email is invalid"))]
    pub email: String,

    #[serde(default)]
    pub phone: Option<String>,

    #[validate(length(min = 8, message = "password must have at least 8 characters"))]
    pub password: String,

    #[serde(default)]
    pub role: Option<Role>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateUserValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[serde(default)]
    pub lastname: String,

    #[validate(email(message = "email is invalid"))]
    pub email: String,

    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdatePasswordValidator {
    #[serde(rename = "pass")]
    #[validate(length(min = 1, message = "current password is required"))]
    pub current_password: String,

    #[serde(rename = "new-pass")]
    #[validate(length(min = 8, message = "password must have at least 8 characters"))]
    pub new_password: String,

    #[serde(rename = "confirm-pass")]
    #[validate(must_match(other = "new_password", message = "passwords do not match"))]
    pub confirm_password: String,
}
