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
    path = "/proyectos/{id}/medios/galeria/{img}",
    tag = "project",
    summary = "Remove gallery image",
    params(
        ("id" = Uuid, Path, description = "Project id"),
        ("img" = String, Path, description = "Stored file name"),
    ),
    responses(
        (status = 200, body = Project),
        (status = 404, description = "Project or image not found")
    ),
)]
pub async fn remove_gallery_image(
    Path((project_id, img)): Path<(Uuid, String)>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<Project>, ApiError> {
    let project = state
        .service
        .remove_gallery_image(identity, project_id, img)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(project))
}
