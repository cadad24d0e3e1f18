use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};
use sibra_core::domain::property::{
    entities::Property, ports::PropertyService, value_objects::NearbyDistance,
};
use tracing::warn;
use utoipa::ToSchema;

use crate::application::http::{
    property::validators::NearbyQuery,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyWithNearbyResponse {
    pub property: Property,
    pub nearby_properties: Vec<Property>,
}

#[utoipa::path(
    get,
    path = "/propiedades/{contract}/{id}",
    tag = "property",
    summary = "Listing detail with nearby listings",
    description = "The listing must carry the contract in the path. Nearby listings share the contract type and are ordered by distance.",
    params(
        ("contract" = String, Path, description = "`venta` or `renta`"),
        ("id" = String, Path, description = "Listing id or slug"),
        NearbyQuery
    ),
    responses(
        (status = 200, body = PropertyWithNearbyResponse),
        (status = 404, description = "Listing not found under this contract")
    ),
)]
pub async fn get_property_with_nearby(
    Path((contract, id)): Path<(String, String)>,
    Query(query): Query<NearbyQuery>,
    State(state): State<AppState>,
) -> Result<Response<PropertyWithNearbyResponse>, ApiError> {
    let property = state
        .service
        .find_property(id)
        .await
        .map_err(ApiError::from)?;

    if !property.contract.eq_ignore_ascii_case(contract.trim()) {
        return Err(ApiError::NotFound("Resource not found".to_string()));
    }

    let distance = NearbyDistance::from_meters(query.d.and_then(|d| d.trim().parse().ok()));
    let nearby_properties = state
        .service
        .find_nearby(property.clone(), distance)
        .await
        .unwrap_or_else(|e| {
            warn!(property_id = %property.id, "Nearby lookup failed: {}", e);
            Vec::new()
        });

    Ok(Response::OK(PropertyWithNearbyResponse {
        property,
        nearby_properties,
    }))
}
