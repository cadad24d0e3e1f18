use axum::extract::{Path, State};
use sibra_core::domain::user::{entities::User, ports::UserService};
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    delete,
    path = "/users/{id}/pic",
    tag = "user",
    summary = "Remove profile picture",
    params(
        ("id" = Uuid, Path, description = "User id"),
    ),
    responses(
        (status = 200, body = User)
    ),
)]
pub async fn delete_user_picture(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<User>, ApiError> {
    let user = state
        .service
        .delete_user_picture(identity, user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(user))
}
