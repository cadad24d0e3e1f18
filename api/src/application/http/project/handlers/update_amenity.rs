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
    path = "/proyectos/{id}/medios/amenidades/{amenity_id}",
    tag = "project",
    summary = "Update amenity",
    description = "A new `file` replaces the stored image. Without one the image is kept.",
    params(
        ("id" = Uuid, Path, description = "Project id"),
        ("amenity_id" = Uuid, Path, description = "Amenity id"),
    ),
    responses(
        (status = 200, body = Project),
        (status = 404, description = "Project or amenity not found")
    ),
)]
pub async fn update_amenity(
    Path((project_id, amenity_id)): Path<(Uuid, Uuid)>,
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
        .update_amenity(identity, project_id, amenity_id, input)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(project))
}
