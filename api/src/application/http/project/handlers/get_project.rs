use axum::extract::{Path, State};
use sibra_core::domain::project::{entities::Project, ports::ProjectService};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/proyectos/{id}",
    tag = "project",
    summary = "Get project",
    params(
        ("id" = String, Path, description = "Project id or slug"),
    ),
    responses(
        (status = 200, body = Project),
        (status = 404, description = "Project not found")
    ),
)]
pub async fn get_project(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<Project>, ApiError> {
    let project = state
        .service
        .find_project(id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(project))
}
