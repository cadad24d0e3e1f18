use axum::extract::State;
use sibra_core::domain::property::{entities::Property, ports::PropertyService};

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
    post,
    path = "/property",
    tag = "property",
    summary = "Create listing",
    description = "The caller becomes the listing agent. Requires editor access.",
    request_body = PropertyValidator,
    responses(
        (status = 201, body = Property),
        (status = 403, description = "Editor access required"),
        (status = 409, description = "A listing with the same slug exists")
    ),
)]
pub async fn create_property(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<PropertyValidator>,
) -> Result<Response<Property>, ApiError> {
    let property = state
        .service
        .create_property(identity, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(property))
}
