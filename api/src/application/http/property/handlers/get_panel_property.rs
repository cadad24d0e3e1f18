use axum::extract::{Path, State};
use sibra_core::domain::property::{entities::Property, ports::PropertyService};

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/propiedades/panel/{id}",
    tag = "property",
    summary = "Listing for the admin panel",
    params(
        ("id" = String, Path, description = "Listing id or slug"),
    ),
    responses(
        (status = 200, body = Property),
        (status = 401, description = "Missing or invalid session"),
        (status = 404, description = "Listing not found")
    ),
)]
pub async fn get_panel_property(
    Path(id): Path<String>,
    State(state): State<AppState>,
    RequiredIdentity(_identity): RequiredIdentity,
) -> Result<Response<Property>, ApiError> {
    let property = state
        .service
        .find_property(id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(property))
}
