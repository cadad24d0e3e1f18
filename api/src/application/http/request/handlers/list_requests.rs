use axum::extract::{Query, State};
use sibra_core::domain::request::{entities::RequestPage, ports::RequestService};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        request::validators::RequestListQuery,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    get,
    path = "/citas",
    tag = "request",
    summary = "List requests",
    description = "Newest first. Requires editor access.",
    params(RequestListQuery),
    responses(
        (status = 200, body = RequestPage),
        (status = 403, description = "Editor access required")
    ),
)]
pub async fn list_requests(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Query(query): Query<RequestListQuery>,
) -> Result<Response<RequestPage>, ApiError> {
    let page = state
        .service
        .list_requests(identity, query.filter(), query.page())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(page))
}
