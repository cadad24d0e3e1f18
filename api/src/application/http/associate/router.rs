use axum::{
    Router,
    routing::{post, put},
};
use utoipa::OpenApi;

use super::handlers::{
    create_associate::{__path_create_associate, create_associate},
    delete_associate::{__path_delete_associate, delete_associate},
    update_associate::{__path_update_associate, update_associate},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(create_associate, update_associate, delete_associate))]
pub struct AssociateApiDoc;

pub fn associate_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(&format!("{root_path}/socios"), post(create_associate))
        .route(
            &format!("{root_path}/socios/{{id}}"),
            put(update_associate).delete(delete_associate),
        )
}
