use axum::extract::State;
use axum_extra::extract::cookie::CookieJar;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sibra_core::domain::{
    authentication::{entities::SESSION_COOKIE, ports::AuthService, value_objects::SignInInput},
    user::entities::User,
};
use utoipa::ToSchema;

use crate::application::{
    auth::auth_cookie,
    http::{
        authentication::validators::SignInValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    pub user: User,
    pub expires_at: DateTime<Utc>,
}

#[utoipa::path(
    post,
    path = "/admin/sign-in",
    tag = "auth",
    summary = "Sign in",
    description = "Verifies the credentials and sets the `auth_token` session cookie.",
    request_body = SignInValidator,
    responses(
        (status = 200, body = SignInResponse),
        (status = 401, description = "Invalid credentials")
    ),
)]
pub async fn sign_in(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidateJson(payload): ValidateJson<SignInValidator>,
) -> Result<(CookieJar, Response<SignInResponse>), ApiError> {
    let session = state
        .service
        .sign_in(SignInInput {
            login: payload.username,
            password: payload.password,
        })
        .await
        .map_err(ApiError::from)?;

    let cookie = auth_cookie(SESSION_COOKIE, session.token, state.args.auth.cookie_secure);

    Ok((
        jar.add(cookie),
        Response::OK(SignInResponse {
            user: session.user,
            expires_at: session.expires_at,
        }),
    ))
}
