use axum::extract::{Path, State};
use sibra_core::domain::project::{entities::Project, ports::ProjectService};
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        project::validators::UpdateProjectValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    put,
    path = "/proyectos/{id}",
    tag = "project",
    summary = "Update project",
    description = "Renaming a project recomputes its slug.",
    params(
        ("id" = Uuid, Path, description = "Project id"),
    ),
    request_body = UpdateProjectValidator,
    responses(
        (status = 200, body = Project),
        (status = 404, description = "Project not found")
    ),
)]
pub async fn update_project(
    Path(project_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateProjectValidator>,
) -> Result<Response<Project>, ApiError> {
    let project = state
        .service
        .update_project(identity, project_id, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(project))
}
