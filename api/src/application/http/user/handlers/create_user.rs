use axum::extract::State;
use sibra_core::domain::user::{entities::User, ports::UserService, value_objects::CreateUserInput};

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
        user::validators::CreateUserValidator,
    },
};

#[utoipa::path(
    post,
    path = "/user",
    tag = "user",
    summary = "Create user",
    description = "Admin only. The password is hashed before it is stored.",
    request_body = CreateUserValidator,
    responses(
        (status = 201, body = User),
        (status = 403, description = "Caller is not an admin"),
        (status = 409, description = "Username or email already registered")
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreateUserValidator>,
) -> Result<Response<User>, ApiError> {
    let user = state
        .service
        .create_user(
            identity,
            CreateUserInput {
                name: payload.name,
                lastname: payload.lastname,
                username: payload.username,
                email: payload.email,
                phone: payload.phone.filter(|phone| !phone.trim().is_empty()),
                password: payload.password,
                role: payload.role,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(user))
}
