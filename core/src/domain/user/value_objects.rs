use uuid::Uuid;

use super::entities::Role;

#[derive(Debug, Clone)]
pub struct CreateUserInput {
    pub name: String,
    pub lastname: String,
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
    pub password: String,
    pub role: Option<Role>,
}

#[derive(Debug, Clone)]
pub struct UpdateUserInput {
    pub user_id: Uuid,
    pub name: String,
    pub lastname: String,
    pub email: String,
    pub phone: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UpdatePasswordInput {
    pub user_id: Uuid,
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}
