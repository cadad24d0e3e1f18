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
    path = "/proyectos/{id}/medios/principal",
    tag = "project",
    summary = "Set main image",
    description = "Stored as `{slug}-main-img{ext}`, replacing the previous file.",
    params(
        ("id" = Uuid, Path, description = "Project id"),
    ),
    responses(
        (status = 200, body = Project),
        (status = 400, description = "Missing `file`"),
        (status = 404, description = "Project not found")
    ),
)]
pub async fn set_main_image(
    Path(project_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    multipart: Multipart,
) -> Result<Response<Project>, ApiError> {
    let file = MultipartForm::read(multipart).await?.require_file("file")?;

    let project = state
        .service
        .set_main_image(identity, project_id, file)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(project))
}
