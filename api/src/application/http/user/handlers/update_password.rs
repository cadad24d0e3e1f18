use axum::extract::{Path, State};
use sibra_core::domain::user::{ports::UserService, value_objects::UpdatePasswordInput};
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
        user::validators::UpdatePasswordValidator,
    },
};

#[utoipa::path(
    put,
    path = "/users/{id}/password",
    tag = "user",
    summary = "Change password",
    params(
        ("id" = Uuid, Path, description = "User id"),
    ),
    request_body = UpdatePasswordValidator,
    responses(
        (status = 204, description = "Password changed"),
        (status = 401, description = "Current password does not match"),
        (status = 422, description = "New password and confirmation differ")
    ),
)]
pub async fn update_password(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdatePasswordValidator>,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .update_password(
            identity,
            UpdatePasswordInput {
                user_id,
                current_password: payload.current_password,
                new_password: payload.new_password,
                confirm_password: payload.confirm_password,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
