use axum::extract::{Path, State};
use sibra_core::domain::associate::{entities::Associate, ports::AssociateService};
use uuid::Uuid;

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
    put,
    path = "/socios/{id}",
    tag = "associate",
    summary = "Update associate",
    params(
        ("id" = Uuid, Path, description = "Associate id"),
    ),
    request_body = AssociateValidator,
    responses(
        (status = 200, body = Associate),
        (status = 404, description = "Associate not found")
    ),
)]
pub async fn update_associate(
    Path(associate_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<AssociateValidator>,
) -> Result<Response<Associate>, ApiError> {
    let associate = state
        .service
        .update_associate(identity, associate_id, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(associate))
}
