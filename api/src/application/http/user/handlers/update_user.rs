use axum::extract::{Path, State};
use sibra_core::domain::user::{entities::User, ports::UserService, value_objects::UpdateUserInput};
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
        user::validators::UpdateUserValidator,
    },
};

#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "user",
    summary = "Update user",
    params(
        ("id" = Uuid, Path, description = "User id"),
    ),
    request_body = UpdateUserValidator,
    responses(
        (status = 200, body = User),
        (status = 403, description = "Neither the user nor an admin")
    ),
)]
pub async fn update_user(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateUserValidator>,
) -> Result<Response<User>, ApiError> {
    let user = state
        .service
        .update_user(
            identity,
            UpdateUserInput {
                user_id,
                name: payload.name,
                lastname: payload.lastname,
                email: payload.email,
                phone: payload.phone.filter(|phone| !phone.trim().is_empty()),
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(user))
}
