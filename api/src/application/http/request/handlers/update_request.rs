use axum::extract::{Path, State};
use sibra_core::domain::request::{entities::Request, ports::RequestService};
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        request::validators::UpdateRequestValidator,
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
    path = "/citas/{id}",
    tag = "request",
    summary = "Update request",
    description = "Only the fields present in the body change.",
    params(
        ("id" = Uuid, Path, description = "Request id"),
    ),
    request_body = UpdateRequestValidator,
    responses(
        (status = 200, body = Request),
        (status = 404, description = "Request not found")
    ),
)]
pub async fn update_request(
    Path(request_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateRequestValidator>,
) -> Result<Response<Request>, ApiError> {
    let request = state
        .service
        .update_request(identity, request_id, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(request))
}
