use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    profile::{__path_profile, profile},
    sign_in::{__path_sign_in, sign_in},
    sign_out::{__path_sign_out, sign_out},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(sign_in, sign_out, profile))]
pub struct AuthenticationApiDoc;

pub fn authentication_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(&format!("{root_path}/admin/sign-in"), post(sign_in))
        .route(&format!("{root_path}/admin/sign-out"), post(sign_out))
        .route(&format!("{root_path}/perfil"), get(profile))
}
