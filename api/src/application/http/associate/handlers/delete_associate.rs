use axum::extract::{Path, State};
use sibra_core::domain::associate::ports::AssociateService;
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
    path = "/socios/{id}",
    tag = "associate",
    summary = "Delete associate",
    description = "Also removes the associate from every project.",
    params(
        ("id" = Uuid, Path, description = "Associate id"),
    ),
    responses(
        (status = 204, description = "Associate deleted"),
        (status = 404, description = "Associate not found")
    ),
)]
pub async fn delete_associate(
    Path(associate_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .delete_associate(identity, associate_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
