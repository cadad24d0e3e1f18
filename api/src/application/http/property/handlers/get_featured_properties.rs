use axum::extract::State;
use sibra_core::domain::property::{entities::Property, ports::PropertyService};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/propiedades/destacadas",
    tag = "property",
    summary = "Featured listings",
    responses(
        (status = 200, body = Vec<Property>)
    ),
)]
pub async fn get_featured_properties(
    State(state): State<AppState>,
) -> Result<Response<Vec<Property>>, ApiError> {
    let properties = state
        .service
        .find_featured()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(properties))
}
