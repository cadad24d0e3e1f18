use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{
        HeaderValue, Method,
        header::{ACCEPT, CONTENT_LENGTH, CONTENT_TYPE, LOCATION},
    },
    routing::get,
};
use axum_prometheus::PrometheusMetricLayer;
use sibra_core::{
    application::create_service,
    domain::{common::SibraConfig, storage::value_objects::MAX_PICTURE_BATCH_SIZE},
};
use tower_http::{cors::CorsLayer, services::ServeDir};
use tracing::{debug, info_span, warn};
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::http::{
    associate::router::associate_routes, authentication::router::authentication_routes,
    health::router::health_routes, project::router::project_routes,
    property::router::property_routes, request::router::request_routes,
    server::app_state::AppState, server::openapi::ApiDoc, user::router::user_routes,
};
use crate::args::Args;

pub async fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let config = SibraConfig::from(args.as_ref().clone());
    let service = create_service(config).await?;

    Ok(AppState::new(args, service))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed_origins = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid origin: {}", origin);
                None
            }
        })
        .collect::<Vec<HeaderValue>>();

    debug!("Allowed origins: {:?}", allowed_origins);

    CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::PUT,
            Method::OPTIONS,
        ])
        .allow_origin(allowed_origins)
        .allow_headers([CONTENT_TYPE, CONTENT_LENGTH, ACCEPT, LOCATION])
        .allow_credentials(true)
}

/// Every route except `/metrics`, with docs, static files and the HTTP layers applied.
fn routes(state: &AppState) -> Router<AppState> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let root_path = state.args.server.root_path.clone();

    let mut openapi = ApiDoc::document();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{root_path}{path}"), item))
        .collect();
    openapi.paths = paths;

    let api_docs_url = format!("{root_path}/api-docs/openapi.json");

    Router::new()
        .merge(Scalar::with_url(format!("{root_path}/scalar"), openapi.clone()))
        .merge(
            SwaggerUi::new(format!("{root_path}/swagger-ui")).url(api_docs_url.clone(), openapi.clone()),
        )
        .merge(Redoc::with_url(format!("{root_path}/redoc"), openapi))
        .merge(RapiDoc::new(api_docs_url).path(format!("{root_path}/rapidoc")))
        .merge(health_routes(&root_path))
        .merge(authentication_routes(&root_path))
        .merge(user_routes(&root_path))
        .merge(property_routes(&root_path))
        .merge(project_routes(&root_path))
        .merge(associate_routes(&root_path))
        .merge(request_routes(&root_path))
        .nest_service("/static", ServeDir::new(&state.args.storage.static_path))
        .layer(DefaultBodyLimit::max(MAX_PICTURE_BATCH_SIZE))
        .layer(trace_layer)
        .layer(cors_layer(&state.args.server.allowed_origins))
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();
    let root_path = state.args.server.root_path.clone();

    let router = routes(&state)
        .route(
            &format!("{root_path}/metrics"),
            get(|| async move { metric_handle.render() }),
        )
        .layer(prometheus_layer)
        .with_state(state);

    Ok(router)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_extra::extract::cookie::Cookie;
    use axum_test::TestServer;
    use chrono::{Duration, Utc};
    use clap::Parser;
    use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, Value};
    use serde_json::{Value as Json, json};
    use sibra_core::{
        application::build_service,
        domain::authentication::{
            entities::{SESSION_COOKIE, SessionClaims},
            ports::TokenIssuer,
        },
        entity::properties::Model as PropertyModel,
        infrastructure::jwt::jwt_token_issuer::JwtTokenIssuer,
    };
    use std::collections::BTreeMap;
    use uuid::Uuid;

    use super::*;

    const SECRET: &str = "test-secret";

    fn test_args() -> Arc<Args> {
        Arc::new(Args::parse_from([
            "sibra-api",
            "--database-url",
            "postgres://localhost/sibra",
            "--jwt-secret",
            SECRET,
        ]))
    }

    fn server(db: DatabaseConnection) -> TestServer {
        let args = test_args();
        let service = build_service(db, &SibraConfig::from(args.as_ref().clone()));
        let state = AppState::new(args, service);

        TestServer::new(routes(&state).with_state(state)).unwrap()
    }

    fn empty_server() -> TestServer {
        server(MockDatabase::new(DatabaseBackend::Postgres).into_connection())
    }

    fn session(role: &str) -> Cookie<'static> {
        let claims = SessionClaims {
            id: Uuid::new_v4(),
            username: "agente".to_string(),
            fullname: "Agente Prueba".to_string(),
            role: role.to_string(),
            exp: (Utc::now() + Duration::hours(1)).timestamp(),
        };
        let token = JwtTokenIssuer::new(SECRET).sign_session(&claims).unwrap();

        Cookie::new(SESSION_COOKIE, token)
    }

    fn listing() -> Json {
        json!({
            "address": "Av. Constitución 123",
            "city": "Monterrey",
            "state": "Nuevo León",
            "price": 1500000.0,
            "contract": "venta"
        })
    }

    fn sale_row() -> PropertyModel {
        PropertyModel {
            id: Uuid::new_v4(),
            address: "Av. Constitución 123".to_string(),
            description: String::new(),
            city: "Monterrey".to_string(),
            state: "Nuevo León".to_string(),
            zip: "64000".to_string(),
            nb_hood: "Centro".to_string(),
            country: "México".to_string(),
            price: 1500000.0,
            property_type: "casa".to_string(),
            contract: "venta".to_string(),
            beds: 3,
            baths: 2,
            square_mt: 180.0,
            lot_size: 200.0,
            listing_date: Utc::now().fixed_offset(),
            year_built: 2015,
            status: "publicada".to_string(),
            lat: 25.67,
            lon: -100.31,
            features: json!({}),
            featured: false,
            featured_expires_at: None,
            main_img: String::new(),
            imgs: Vec::new(),
            agent: None,
            slug: "casa-centro".to_string(),
        }
    }

    #[tokio::test]
    async fn test_liveness() {
        let response = empty_server().get("/api/health/live").await;

        response.assert_status_ok();
        response.assert_json(&json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn test_profile_requires_session() {
        let response = empty_server().get("/api/perfil").await;

        response.assert_status(StatusCode::UNAUTHORIZED);
        assert_eq!(response.json::<Json>()["code"], "E_UNAUTHORIZED");
    }

    #[tokio::test]
    async fn test_forged_session_is_rejected() {
        let response = empty_server()
            .get("/api/perfil")
            .add_cookie(Cookie::new(SESSION_COOKIE, "not-a-token"))
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_user_role_cannot_publish() {
        let response = empty_server()
            .post("/api/property")
            .add_cookie(session("user"))
            .json(&listing())
            .await;

        response.assert_status(StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_invalid_listing_is_unprocessable() {
        let mut body = listing();
        body["address"] = json!("");

        let response = empty_server()
            .post("/api/property")
            .add_cookie(session("editor"))
            .json(&body)
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_search_returns_pagination() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![BTreeMap::from([(
                "num_items",
                Value::BigInt(Some(0)),
            )])]])
            .append_query_results([Vec::<BTreeMap<&str, Value>>::new()])
            .into_connection();

        let response = server(db)
            .get("/api/propiedades")
            .add_query_param("contract", "venta")
            .add_query_param("page", "2")
            .await;

        response.assert_status_ok();
        let body = response.json::<Json>();
        assert_eq!(body["properties"], json!([]));
        assert_eq!(body["pagination"]["total"], 0);
        assert_eq!(body["pagination"]["page"], 2);
    }

    #[tokio::test]
    async fn test_listing_detail_under_its_contract() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![sale_row()]])
            .append_query_results([Vec::<PropertyModel>::new()])
            .into_connection();

        let response = server(db).get("/api/propiedades/venta/casa-centro").await;

        response.assert_status_ok();
        let body = response.json::<Json>();
        assert_eq!(body["property"]["slug"], "casa-centro");
        assert_eq!(body["nearbyProperties"], json!([]));
    }

    #[tokio::test]
    async fn test_listing_detail_under_other_contract_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![sale_row()]])
            .into_connection();

        let response = server(db).get("/api/propiedades/renta/casa-centro").await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(response.json::<Json>()["code"], "E_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_project_access_without_cookie() {
        let response = empty_server()
            .get(&format!("/api/proyectos/{}/acceso", Uuid::new_v4()))
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
        response.assert_json(&json!({ "authorized": false }));
    }

    #[tokio::test]
    async fn test_project_access_requires_identifier() {
        let response = empty_server()
            .post("/api/proyectos/las-palmas/acceso")
            .json(&json!({ "idcode": "", "lotNum": "4", "appleNum": "2" }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_request_requires_name() {
        let response = empty_server()
            .post("/api/citas")
            .json(&json!({ "type": "cita", "name": "", "phone": "8110000000" }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_request_listing_requires_editor() {
        let response = empty_server()
            .get("/api/citas")
            .add_cookie(session("user"))
            .await;

        response.assert_status(StatusCode::FORBIDDEN);
    }
}
