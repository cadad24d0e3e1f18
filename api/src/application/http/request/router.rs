use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    create_demo_request::{__path_create_demo_request, create_demo_request},
    create_quote_request::{__path_create_quote_request, create_quote_request},
    create_request::{__path_create_request, create_request},
    get_request::{__path_get_request, get_request},
    list_requests::{__path_list_requests, list_requests},
    update_request::{__path_update_request, update_request},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(
    create_request,
    create_quote_request,
    create_demo_request,
    list_requests,
    get_request,
    update_request
))]
pub struct RequestApiDoc;

pub fn request_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{root_path}/citas"),
            get(list_requests).post(create_request),
        )
        .route(
            &format!("{root_path}/citas/conquistadores"),
            post(create_quote_request),
        )
        .route(&format!("{root_path}/citas/demo"), post(create_demo_request))
        .route(
            &format!("{root_path}/citas/{{id}}"),
            get(get_request).put(update_request),
        )
}
