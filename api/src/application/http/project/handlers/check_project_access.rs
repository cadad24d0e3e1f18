use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response as AxumResponse},
};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};
use sibra_core::domain::{
    associate::entities::ProjectAssociate, common::entities::app_errors::CoreError,
    project::ports::ProjectService,
};
use utoipa::ToSchema;

use crate::application::{
    auth::project_access_token,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ProjectAccessResponse {
    pub authorized: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub associate: Option<ProjectAssociate>,
}

impl ProjectAccessResponse {
    pub fn granted(associate: ProjectAssociate) -> Self {
        Self {
            authorized: true,
            associate: Some(associate),
        }
    }

    pub fn denied() -> AxumResponse {
        let body = Self {
            authorized: false,
            associate: None,
        };
        (StatusCode::UNAUTHORIZED, Json(body)).into_response()
    }
}

#[utoipa::path(
    get,
    path = "/proyectos/{id}/acceso",
    tag = "project",
    summary = "Check project access",
    description = "Verifies the `project_auth` cookie against the project and the current \
        associate records.",
    params(
        ("id" = String, Path, description = "Project id or slug"),
    ),
    responses(
        (status = 200, body = ProjectAccessResponse),
        (status = 401, body = ProjectAccessResponse)
    ),
)]
pub async fn check_project_access(
    Path(id): Path<String>,
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<AxumResponse, ApiError> {
    let Some(token) = project_access_token(&jar) else {
        return Ok(ProjectAccessResponse::denied());
    };

    match state.service.check_project_access(id, token).await {
        Ok(associate) => Ok(Response::OK(ProjectAccessResponse::granted(associate)).into_response()),
        Err(CoreError::Unauthorized) => Ok(ProjectAccessResponse::denied()),
        Err(e) => Err(ApiError::from(e)),
    }
}
