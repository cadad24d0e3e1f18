use axum::extract::State;
use sibra_core::domain::request::{
    entities::Request, ports::RequestService, value_objects::QuoteTemplate,
};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        request::validators::QuoteRequestValidator,
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
    path = "/citas/demo",
    tag = "request",
    summary = "Request a demo",
    description = "Panel variant of the quote request using the `info_request` template.",
    request_body = QuoteRequestValidator,
    responses(
        (status = 201, body = Request),
        (status = 401, description = "Session required")
    ),
)]
pub async fn create_demo_request(
    State(state): State<AppState>,
    RequiredIdentity(_identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<QuoteRequestValidator>,
) -> Result<Response<Request>, ApiError> {
    let request = state
        .service
        .create_quote_request(payload.into(), QuoteTemplate::InfoRequest)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(request))
}
