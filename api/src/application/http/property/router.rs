use axum::{
    Router,
    routing::{get, post, put},
};
use utoipa::OpenApi;

use super::handlers::{
    create_property::{__path_create_property, create_property},
    delete_property::{__path_delete_property, delete_property},
    delete_property_picture::{__path_delete_property_picture, delete_property_picture},
    get_featured_properties::{__path_get_featured_properties, get_featured_properties},
    get_panel_property::{__path_get_panel_property, get_panel_property},
    get_property_with_nearby::{__path_get_property_with_nearby, get_property_with_nearby},
    search_contract_properties::{__path_search_contract_properties, search_contract_properties},
    search_properties::{__path_search_properties, search_properties},
    update_property::{__path_update_property, update_property},
    upload_property_pictures::{__path_upload_property_pictures, upload_property_pictures},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(
    search_properties,
    get_featured_properties,
    get_panel_property,
    search_contract_properties,
    get_property_with_nearby,
    create_property,
    update_property,
    delete_property,
    upload_property_pictures,
    delete_property_picture
))]
pub struct PropertyApiDoc;

pub fn property_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(&format!("{root_path}/propiedades"), get(search_properties))
        .route(
            &format!("{root_path}/propiedades/destacadas"),
            get(get_featured_properties),
        )
        .route(
            &format!("{root_path}/propiedades/panel/{{id}}"),
            get(get_panel_property),
        )
        .route(
            &format!("{root_path}/propiedades/{{contract}}"),
            get(search_contract_properties),
        )
        .route(
            &format!("{root_path}/propiedades/{{contract}}/{{id}}"),
            get(get_property_with_nearby),
        )
        .route(&format!("{root_path}/property"), post(create_property))
        .route(
            &format!("{root_path}/property/{{id}}"),
            put(update_property).delete(delete_property),
        )
        .route(
            &format!("{root_path}/property/pictures/{{id}}"),
            post(upload_property_pictures).delete(delete_property_picture),
        )
}
