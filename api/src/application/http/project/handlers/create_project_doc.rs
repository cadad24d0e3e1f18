use axum::extract::{Multipart, Path, State};
use sibra_core::domain::project::{
    entities::ProjectDoc, ports::ProjectService, value_objects::ProjectDocInput,
};
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        multipart::MultipartForm,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    post,
    path = "/proyectos/{id}/documentos",
    tag = "project",
    summary = "Upload project document",
    description = "Multipart form with exactly one `file`, a `filename` and a `description`. \
        Documents are capped at 64 MiB.",
    params(
        ("id" = Uuid, Path, description = "Project id"),
    ),
    responses(
        (status = 201, body = ProjectDoc),
        (status = 400, description = "Zero or several files, or a blank filename")
    ),
)]
pub async fn create_project_doc(
    Path(project_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    multipart: Multipart,
) -> Result<Response<ProjectDoc>, ApiError> {
    let mut form = MultipartForm::read(multipart).await?;
    let mut files = form.take_files("file");
    if files.len() != 1 {
        return Err(ApiError::BadRequest(
            "Exactly one 'file' is expected".to_string(),
        ));
    }

    let input = ProjectDocInput {
        file: files.remove(0),
        filename: form.text("filename").unwrap_or_default().to_string(),
        description: form.text("description").unwrap_or_default().to_string(),
    };

    let doc = state
        .service
        .create_project_doc(identity, project_id, input)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(doc))
}
