use utoipa::OpenApi;

use crate::application::http::{
    associate::router::AssociateApiDoc, authentication::router::AuthenticationApiDoc,
    health::router::HealthApiDoc, project::router::ProjectApiDoc,
    property::router::PropertyApiDoc, request::router::RequestApiDoc, user::router::UserApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "SIBRA API",
        description = "Listings, developments and lead management for SIBRA Bienes Raices."
    ),
    tags(
        (name = "health"),
        (name = "auth"),
        (name = "user"),
        (name = "property", description = "Listing search and management"),
        (name = "project", description = "Developments, their media and associate access"),
        (name = "associate"),
        (name = "request", description = "Leads and appointments"),
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    /// Every area document merged under the paths the handlers declare.
    pub fn document() -> utoipa::openapi::OpenApi {
        let mut openapi = ApiDoc::openapi();

        openapi.merge(HealthApiDoc::openapi());
        openapi.merge(AuthenticationApiDoc::openapi());
        openapi.merge(UserApiDoc::openapi());
        openapi.merge(PropertyApiDoc::openapi());
        openapi.merge(ProjectApiDoc::openapi());
        openapi.merge(AssociateApiDoc::openapi());
        openapi.merge(RequestApiDoc::openapi());

        openapi
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_area() {
        let openapi = ApiDoc::document();
        let paths = &openapi.paths.paths;

        for path in [
            "/health/live",
            "/admin/sign-in",
            "/users/{id}/password",
            "/propiedades/{contract}/{id}",
            "/proyectos/{id}/acceso",
            "/socios/{id}",
            "/citas/conquistadores",
        ] {
            assert!(paths.contains_key(path), "missing {path}");
        }
    }
}
