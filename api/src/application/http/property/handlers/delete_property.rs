use axum::extract::{Path, State};
use sibra_core::domain::property::ports::PropertyService;
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
    path = "/property/{id}",
    tag = "property",
    summary = "Delete listing",
    description = "Removes the row and the listing's picture directory.",
    params(
        ("id" = Uuid, Path, description = "Listing id"),
    ),
    responses(
        (status = 204, description = "Listing deleted"),
        (status = 404, description = "Listing not found")
    ),
)]
pub async fn delete_property(
    Path(property_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .delete_property(identity, property_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
