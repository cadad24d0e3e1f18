use axum::extract::{Multipart, Path, State};
use sibra_core::domain::property::{
    entities::Property, ports::PropertyService, value_objects::PropertyPicturesInput,
};
use tracing::info;
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
    path = "/property/pictures/{id}",
    tag = "property",
    summary = "Upload listing pictures",
    description = "Multipart form: `pics` (repeatable gallery files), `main-pic` (single file) \
        and `delPics` (gallery names to remove). The whole form is capped at 90 MiB.",
    params(
        ("id" = Uuid, Path, description = "Listing id"),
    ),
    responses(
        (status = 200, body = Property),
        (status = 404, description = "Listing not found"),
        (status = 413, description = "Form exceeds the upload limit")
    ),
)]
pub async fn upload_property_pictures(
    Path(property_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    multipart: Multipart,
) -> Result<Response<Property>, ApiError> {
    let mut form = MultipartForm::read(multipart).await?;
    let input = PropertyPicturesInput {
        pictures: form.take_files("pics"),
        main_picture: form.take_file("main-pic"),
        delete_pictures: form.list("delPics"),
    };

    info!(
        %property_id,
        pictures = input.pictures.len(),
        main = input.main_picture.is_some(),
        deleted = input.delete_pictures.len(),
        "Uploading listing pictures"
    );

    let property = state
        .service
        .upload_property_pictures(identity, property_id, input)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(property))
}
