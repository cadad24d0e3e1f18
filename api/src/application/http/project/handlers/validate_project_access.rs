use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response as AxumResponse},
};
use axum_extra::extract::cookie::CookieJar;
use sibra_core::domain::{
    authentication::entities::PROJECT_ACCESS_COOKIE, common::entities::app_errors::CoreError,
    project::ports::ProjectService,
};
use tracing::info;

use super::check_project_access::ProjectAccessResponse;
use crate::application::{
    auth::auth_cookie,
    http::{
        project::validators::ProjectAccessValidator,
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
    post,
    path = "/proyectos/{id}/acceso",
    tag = "project",
    summary = "Request project access",
    description = "An associate of the project identifies with RFC or CURP plus lot and block. \
        On success the `project_auth` cookie is set for 24 hours.",
    params(
        ("id" = String, Path, description = "Project id or slug"),
    ),
    request_body = ProjectAccessValidator,
    responses(
        (status = 200, body = ProjectAccessResponse),
        (status = 401, body = ProjectAccessResponse)
    ),
)]
pub async fn validate_project_access(
    Path(id): Path<String>,
    State(state): State<AppState>,
    jar: CookieJar,
    ValidateJson(payload): ValidateJson<ProjectAccessValidator>,
) -> Result<AxumResponse, ApiError> {
    let grant = match state.service.validate_project_access(id, payload.into()).await {
        Ok(grant) => grant,
        Err(CoreError::Unauthorized) => return Ok(ProjectAccessResponse::denied()),
        Err(e) => return Err(ApiError::from(e)),
    };

    info!(associate_id = %grant.associate.id, "Project access granted");

    let cookie = auth_cookie(
        PROJECT_ACCESS_COOKIE,
        grant.token,
        state.args.auth.cookie_secure,
    );

    Ok((
        jar.add(cookie),
        Response::OK(ProjectAccessResponse::granted(grant.associate)),
    )
        .into_response())
}
