use axum::extract::State;
use sibra_core::domain::property::{entities::PropertyPage, ports::PropertyService};

use crate::application::http::{
    property::validators::PropertySearchParams,
    query_extractor::PropertySearchQuery,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/propiedades",
    tag = "property",
    summary = "Search listings",
    description = "Filters, sorts and paginates listings. Malformed values are ignored and a \
        partial proximity triple is dropped.",
    params(PropertySearchParams),
    responses(
        (status = 200, body = PropertyPage)
    ),
)]
pub async fn search_properties(
    State(state): State<AppState>,
    PropertySearchQuery(search): PropertySearchQuery,
) -> Result<Response<PropertyPage>, ApiError> {
    let page = state
        .service
        .search_properties(search.filter, search.page)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(page))
}
