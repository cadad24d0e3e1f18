use axum::extract::{Path, State};
use sibra_core::domain::project::ports::ProjectService;
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        project::validators::UpdateAssociateLinkValidator,
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
    path = "/proyectos/{id}/socios/{associate_id}",
    tag = "project",
    summary = "Update associate payment status",
    params(
        ("id" = Uuid, Path, description = "Project id"),
        ("associate_id" = Uuid, Path, description = "Associate id"),
    ),
    request_body = UpdateAssociateLinkValidator,
    responses(
        (status = 204, description = "Link updated"),
        (status = 404, description = "Associate is not linked to the project")
    ),
)]
pub async fn update_project_associate(
    Path((project_id, associate_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateAssociateLinkValidator>,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .update_project_associate(identity, project_id, associate_id, payload.pending_payment)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
