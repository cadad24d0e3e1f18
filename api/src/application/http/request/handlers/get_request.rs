use axum::extract::{Path, State};
use sibra_core::domain::request::{entities::Request, ports::RequestService};
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/citas/{id}",
    tag = "request",
    summary = "Get request",
    params(
        ("id" = Uuid, Path, description = "Request id"),
    ),
    responses(
        (status = 200, body = Request),
        (status = 404, description = "Request not found")
    ),
)]
pub async fn get_request(
    Path(request_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<Request>, ApiError> {
    let request = state
        .service
        .find_request(identity, request_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(request))
}
