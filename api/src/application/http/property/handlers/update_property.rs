use axum::extract::{Path, State};
use sibra_core::domain::property::{entities::Property, ports::PropertyService};
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        property::validators::PropertyValidator,
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
    put,
    path = "/property/{id}",
    tag = "property",
    summary = "Update listing",
    description = "Agent, pictures and slug are kept. Editing another agent's listing requires admin.",
    params(
        ("id" = Uuid, Path, description = "Listing id"),
    ),
    request_body = PropertyValidator,
    responses(
        (status = 200, body = Property),
        (status = 403, description = "Not allowed to edit this listing"),
        (status = 404, description = "Listing not found")
    ),
)]
pub async fn update_property(
    Path(property_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<PropertyValidator>,
) -> Result<Response<Property>, ApiError> {
    let property = state
        .service
        .update_property(identity, property_id, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(property))
}
