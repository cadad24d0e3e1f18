use axum::extract::{Path, State};
use sibra_core::domain::project::{entities::Project, ports::ProjectService};
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
    path = "/proyectos/{id}/medios/disponibilidad",
    tag = "project",
    summary = "Remove availability image",
    params(
        ("id" = Uuid, Path, description = "Project id"),
    ),
    responses(
        (status = 200, body = Project),
        (status = 404, description = "Project not found")
    ),
)]
pub async fn remove_availability_image(
    Path(project_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<Project>, ApiError> {
    let project = state
        .service
        .remove_availability_image(identity, project_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(project))
}
