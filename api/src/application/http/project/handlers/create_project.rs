use axum::extract::State;
use sibra_core::domain::project::{entities::Project, ports::ProjectService};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        project::validators::CreateProjectValidator,
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
    path = "/proyectos",
    tag = "project",
    summary = "Create project",
    description = "Creates the project and its associates in one transaction. Every associate \
        needs an RFC or a CURP.",
    request_body = CreateProjectValidator,
    responses(
        (status = 201, body = Project),
        (status = 400, description = "An associate has neither RFC nor CURP"),
        (status = 403, description = "Editor access required")
    ),
)]
pub async fn create_project(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreateProjectValidator>,
) -> Result<Response<Project>, ApiError> {
    let project = state
        .service
        .create_project(identity, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(project))
}
