use axum::extract::State;
use sibra_core::domain::associate::{entities::Associate, ports::AssociateService};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        associate::validators::AssociateValidator,
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
    path = "/socios",
    tag = "associate",
    summary = "Create associate",
    request_body = AssociateValidator,
    responses(
        (status = 201, body = Associate),
        (status = 403, description = "Editor access required"),
        (status = 422, description = "RFC or CURP missing")
    ),
)]
pub async fn create_associate(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<AssociateValidator>,
) -> Result<Response<Associate>, ApiError> {
    let associate = state
        .service
        .create_associate(identity, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(associate))
}
