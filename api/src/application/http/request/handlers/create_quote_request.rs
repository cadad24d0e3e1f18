use axum::extract::State;
use sibra_core::domain::request::{
    entities::Request, ports::RequestService, value_objects::QuoteTemplate,
};

use crate::application::http::{
    request::validators::QuoteRequestValidator,
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
    path = "/citas/conquistadores",
    tag = "request",
    summary = "Request a Conquistadores quote",
    description = "Sends the quote to the sales phone over WhatsApp and records the appointment.",
    request_body = QuoteRequestValidator,
    responses(
        (status = 201, body = Request),
        (status = 500, description = "Messaging provider unavailable")
    ),
)]
pub async fn create_quote_request(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<QuoteRequestValidator>,
) -> Result<Response<Request>, ApiError> {
    let request = state
        .service
        .create_quote_request(payload.into(), QuoteTemplate::Conquistadores)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(request))
}
