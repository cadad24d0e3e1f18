use axum::extract::{Path, State};
use axum_extra::extract::cookie::CookieJar;
use sibra_core::domain::project::{entities::ProjectDoc, ports::ProjectService};

use crate::application::{
    auth::project_access_token,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/proyectos/{id}/documentos",
    tag = "project",
    summary = "List project documents",
    description = "Requires the `project_auth` cookie issued by the access endpoint.",
    params(
        ("id" = String, Path, description = "Project id or slug"),
    ),
    responses(
        (status = 200, body = Vec<ProjectDoc>),
        (status = 401, description = "Missing or invalid project access")
    ),
)]
pub async fn get_project_docs(
    Path(id): Path<String>,
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Response<Vec<ProjectDoc>>, ApiError> {
    let token = project_access_token(&jar)
        .ok_or_else(|| ApiError::Unauthorized("Project access required".to_string()))?;

    let docs = state
        .service
        .get_project_docs(id, token)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(docs))
}
