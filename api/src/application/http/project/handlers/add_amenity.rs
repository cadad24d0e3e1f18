use axum::extract::{Multipart, Path, State};
use sibra_core::domain::project::{
    entities::Project, ports::ProjectService, value_objects::AmenityInput,
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
    put,
    path = "/proyectos/{id}/medios/amenidades",
    tag = "project",
    summary = "Add amenity",
    description = "Multipart form with `name`, `icon` and an optional `file` image.",
    params(
        ("id" = Uuid, Path, description = "Project id"),
    ),
    responses(
        (status = 200, body = Project),
        (status = 400, description = "Missing name")
    ),
)]
pub async fn add_amenity(
    Path(project_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    multipart: Multipart,
) -> Result<Response<Project>, ApiError> {
    let mut form = MultipartForm::read(multipart).await?;
    let input = AmenityInput {
        name: form.text("name").unwrap_or_default().to_string(),
        icon: form.text("icon").unwrap_or_default().to_string(),
        img: form.take_file("file"),
    };

    let project = state
        .service
        .add_amenity(identity, project_id, input)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(project))
}
