use axum::extract::{Path, State};
use sibra_core::domain::property::{entities::Property, ports::PropertyService};
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        property::validators::DeletePictureValidator,
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
    delete,
    path = "/property/pictures/{id}",
    tag = "property",
    summary = "Delete a listing picture",
    params(
        ("id" = Uuid, Path, description = "Listing id"),
    ),
    request_body = DeletePictureValidator,
    responses(
        (status = 200, body = Property),
        (status = 404, description = "Listing or picture not found")
    ),
)]
pub async fn delete_property_picture(
    Path(property_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<DeletePictureValidator>,
) -> Result<Response<Property>, ApiError> {
    let property = state
        .service
        .delete_property_picture(identity, property_id, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(property))
}
