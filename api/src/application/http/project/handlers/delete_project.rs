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
    path = "/proyectos/{id}",
    tag = "project",
    summary = "Delete project",
    params(
        ("id" = Uuid, Path, description = "Project id"),
    ),
    responses(
        (status = 204, description = "Project deleted"),
        (status = 404, description = "Project not found")
    ),
)]
pub async fn delete_project(
    Path(project_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .delete_project(identity, project_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
