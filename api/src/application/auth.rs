use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use sibra_core::domain::authentication::{
    entities::{PROJECT_ACCESS_COOKIE, SESSION_COOKIE},
    ports::AuthService,
    value_objects::Identity,
};

use super::http::server::{api_entities::api_error::ApiError, app_state::AppState};

fn session_token(parts: &Parts) -> Option<String> {
    CookieJar::from_headers(&parts.headers)
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|token| !token.is_empty())
}

fn resolve_identity(parts: &mut Parts, state: &AppState) -> Result<Identity, ApiError> {
    if let Some(identity) = parts.extensions.get::<Identity>().cloned() {
        return Ok(identity);
    }

    let token = session_token(parts)
        .ok_or_else(|| ApiError::Unauthorized("Authentication required".to_string()))?;
    let identity = state.service.authenticate(&token).map_err(ApiError::from)?;

    parts.extensions.insert(identity.clone());
    Ok(identity)
}

/// Identity of the `auth_token` cookie. Rejects with 401 when it is missing or invalid.
pub struct RequiredIdentity(pub Identity);

impl<S> FromRequestParts<S> for RequiredIdentity
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        resolve_identity(parts, &app_state).map(RequiredIdentity)
    }
}

pub fn project_access_token(jar: &CookieJar) -> Option<String> {
    jar.get(PROJECT_ACCESS_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|token| !token.is_empty())
}

pub fn auth_cookie(name: &'static str, token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((name, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .secure(secure)
        .build()
}

pub fn expired_cookie(name: &'static str) -> Cookie<'static> {
    Cookie::build(name).path("/").build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_cookie_attributes() {
        let cookie = auth_cookie(SESSION_COOKIE, "token".to_string(), true);

        assert_eq!(cookie.name(), "auth_token");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
        assert_eq!(cookie.secure(), Some(true));
    }

    #[test]
    fn test_project_token_ignores_empty_cookie() {
        let jar = CookieJar::new().add(Cookie::new(PROJECT_ACCESS_COOKIE, ""));
        assert_eq!(project_access_token(&jar), None);

        let jar = CookieJar::new().add(Cookie::new(PROJECT_ACCESS_COOKIE, "abc"));
        assert_eq!(project_access_token(&jar), Some("abc".to_string()));
    }
}
