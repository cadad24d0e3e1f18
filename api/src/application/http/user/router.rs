use axum::{
    Router,
    routing::{post, put},
};
use utoipa::OpenApi;

use super::handlers::{
    create_user::{__path_create_user, create_user},
    delete_user_picture::{__path_delete_user_picture, delete_user_picture},
    update_password::{__path_update_password, update_password},
    update_user::{__path_update_user, update_user},
    update_user_picture::{__path_update_user_picture, update_user_picture},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(
    create_user,
    update_user,
    update_password,
    update_user_picture,
    delete_user_picture
))]
pub struct UserApiDoc;

pub fn user_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(&format!("{root_path}/user"), post(create_user))
        .route(&format!("{root_path}/users/{{id}}"), put(update_user))
        .route(
            &format!("{root_path}/users/{{id}}/password"),
            put(update_password),
        )
        .route(
            &format!("{root_path}/users/{{id}}/pic"),
            put(update_user_picture).delete(delete_user_picture),
        )
}
