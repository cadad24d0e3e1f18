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
    path = "/proyectos/{id}/documentos/{doc_id}",
    tag = "project",
    summary = "Remove project document",
    params(
        ("id" = Uuid, Path, description = "Project id"),
        ("doc_id" = Uuid, Path, description = "Document id"),
    ),
    responses(
        (status = 204, description = "Document and file removed"),
        (status = 404, description = "Project or document not found")
    ),
)]
pub async fn remove_project_doc(
    Path((project_id, doc_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .remove_project_doc(identity, project_id, doc_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
