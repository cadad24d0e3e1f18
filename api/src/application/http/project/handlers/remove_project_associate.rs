use axum::extract::{Path, State};
use sibra_core::domain::project::ports::ProjectService;
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
    path = "/proyectos/{id}/socios/{associate_id}",
    tag = "project",
    summary = "Unlink associate",
    params(
        ("id" = Uuid, Path, description = "Project id"),
        ("associate_id" = Uuid, Path, description = "Associate id"),
    ),
    responses(
        (status = 204, description = "Associate unlinked"),
        (status = 404, description = "Associate is not linked to the project")
    ),
)]
pub async fn remove_project_associate(
    Path((project_id, associate_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .remove_project_associate(identity, project_id, associate_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
