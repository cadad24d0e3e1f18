use axum::extract::{Multipart, Path, State};
use sibra_core::domain::user::{entities::User, ports::UserService};
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        multipart::MultipartForm,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    put,
    path = "/users/{id}/pic",
    tag = "user",
    summary = "Replace profile picture",
    description = "Multipart form with a single `pic` file.",
    params(
        ("id" = Uuid, Path, description = "User id"),
    ),
    responses(
        (status = 200, body = User),
        (status = 400, description = "Missing `pic` file")
    ),
)]
pub async fn update_user_picture(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    multipart: Multipart,
) -> Result<Response<User>, ApiError> {
    let mut form = MultipartForm::read(multipart).await?;
    let file = form.require_file("pic")?;

    let user = state
        .service
        .update_user_picture(identity, user_id, file)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(user))
}
