use axum::extract::{Multipart, Path, State};
use sibra_core::domain::project::{entities::Project, ports::ProjectService};
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
    put,
    path = "/proyectos/{id}/medios/galeria",
    tag = "project",
    summary = "Add gallery images",
    description = "Every `file` part is appended to the gallery.",
    params(
        ("id" = Uuid, Path, description = "Project id"),
    ),
    responses(
        (status = 200, body = Project),
        (status = 400, description = "No files in the form")
    ),
)]
pub async fn add_gallery_images(
    Path(project_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    multipart: Multipart,
) -> Result<Response<Project>, ApiError> {
    let files = MultipartForm::read(multipart).await?.take_files("file");
    if files.is_empty() {
        return Err(ApiError::BadRequest("Missing 'file' files".to_string()));
    }

    let project = state
        .service
        .add_gallery_images(identity, project_id, files)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(project))
}
