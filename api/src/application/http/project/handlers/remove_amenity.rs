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
    path = "/proyectos/{id}/medios/amenidades/{amenity_id}",
    tag = "project",
    summary = "Remove amenity",
    params(
        ("id" = Uuid, Path, description = "Project id"),
        ("amenity_id" = Uuid, Path, description = "Amenity id"),
    ),
    responses(
        (status = 200, body = Project),
        (status = 404, description = "Project or amenity not found")
    ),
)]
pub async fn remove_amenity(
    Path((project_id, amenity_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<Project>, ApiError> {
    let project = state
        .service
        .remove_amenity(identity, project_id, amenity_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(project))
}
