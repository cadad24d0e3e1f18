use axum::extract::State;
use sibra_core::domain::{authentication::ports::AuthService, user::entities::User};

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/perfil",
    tag = "auth",
    summary = "Current user",
    responses(
        (status = 200, body = User),
        (status = 401, description = "Missing or invalid session")
    ),
)]
pub async fn profile(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<User>, ApiError> {
    let user = state
        .service
        .profile(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(user))
}
