use axum::extract::State;
use sibra_core::domain::request::{entities::Request, ports::RequestService};

use crate::application::http::{
    request::validators::CreateRequestValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/citas",
    tag = "request",
    summary = "Create request",
    description = "Public contact form. When `property` is set the listing agent is assigned.",
    request_body = CreateRequestValidator,
    responses(
        (status = 201, body = Request),
        (status = 404, description = "Listing not found"),
        (status = 422, description = "Missing name or phone")
    ),
)]
pub async fn create_request(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateRequestValidator>,
) -> Result<Response<Request>, ApiError> {
    let request = state
        .service
        .create_request(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(request))
}
