use axum::extract::State;
use sibra_core::domain::project::{entities::Project, ports::ProjectService};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/proyectos",
    tag = "project",
    summary = "List projects",
    description = "Associates are only loaded on the single project lookup.",
    responses(
        (status = 200, body = Vec<Project>)
    ),
)]
pub async fn list_projects(
    State(state): State<AppState>,
) -> Result<Response<Vec<Project>>, ApiError> {
    let projects = state
        .service
        .list_projects()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(projects))
}
