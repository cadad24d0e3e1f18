use axum::extract::{Path, State};
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
    path = "/propiedades/{contract}",
    tag = "property",
    summary = "Search listings of a contract type",
    params(
        ("contract" = String, Path, description = "`venta` or `renta`"),
        PropertySearchParams
    ),
    responses(
        (status = 200, body = PropertyPage)
    ),
)]
pub async fn search_contract_properties(
    Path(contract): Path<String>,
    State(state): State<AppState>,
    PropertySearchQuery(mut search): PropertySearchQuery,
) -> Result<Response<PropertyPage>, ApiError> {
    search.filter.contract = Some(contract);

    let page = state
        .service
        .search_properties(search.filter, search.page)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(page))
}
