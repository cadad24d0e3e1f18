use axum::extract::{Path, State};
use sibra_core::domain::project::ports::ProjectService;
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        project::validators::AssociateLinkValidator,
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
    path = "/proyectos/{id}/socios/{associate_id}",
    tag = "project",
    summary = "Link associate",
    params(
        ("id" = Uuid, Path, description = "Project id"),
        ("associate_id" = Uuid, Path, description = "Associate id"),
    ),
    request_body = AssociateLinkValidator,
    responses(
        (status = 204, description = "Associate linked"),
        (status = 404, description = "Project or associate not found"),
        (status = 409, description = "Already linked")
    ),
)]
pub async fn add_project_associate(
    Path((project_id, associate_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<AssociateLinkValidator>,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .add_project_associate(identity, project_id, associate_id, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
