use axum_extra::extract::cookie::CookieJar;
use sibra_core::domain::authentication::entities::SESSION_COOKIE;

use crate::application::{auth::expired_cookie, http::server::api_entities::response::Response};

#[utoipa::path(
    post,
    path = "/admin/sign-out",
    tag = "auth",
    summary = "Sign out",
    responses(
        (status = 204, description = "Session cookie cleared")
    ),
)]
pub async fn sign_out(jar: CookieJar) -> (CookieJar, Response<()>) {
    (jar.remove(expired_cookie(SESSION_COOKIE)), Response::NoContent)
}
