use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    liveness::{__path_liveness, liveness},
    readiness::{__path_readiness, readiness},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(liveness, readiness))]
pub struct HealthApiDoc;

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(&format!("{root_path}/health/live"), get(liveness))
        .route(&format!("{root_path}/health/ready"), get(readiness))
}
