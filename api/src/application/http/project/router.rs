use axum::{
    Router,
    routing::{delete, get, put},
};
use utoipa::OpenApi;

use super::handlers::{
    add_amenity::{__path_add_amenity, add_amenity},
    add_gallery_images::{__path_add_gallery_images, add_gallery_images},
    add_project_associate::{__path_add_project_associate, add_project_associate},
    check_project_access::{__path_check_project_access, check_project_access},
    create_project::{__path_create_project, create_project},
    create_project_doc::{__path_create_project_doc, create_project_doc},
    delete_project::{__path_delete_project, delete_project},
    get_project::{__path_get_project, get_project},
    get_project_docs::{__path_get_project_docs, get_project_docs},
    list_projects::{__path_list_projects, list_projects},
    remove_amenity::{__path_remove_amenity, remove_amenity},
    remove_availability_image::{__path_remove_availability_image, remove_availability_image},
    remove_gallery_image::{__path_remove_gallery_image, remove_gallery_image},
    remove_main_image::{__path_remove_main_image, remove_main_image},
    remove_project_associate::{__path_remove_project_associate, remove_project_associate},
    remove_project_doc::{__path_remove_project_doc, remove_project_doc},
    set_availability_image::{__path_set_availability_image, set_availability_image},
    set_main_image::{__path_set_main_image, set_main_image},
    update_amenity::{__path_update_amenity, update_amenity},
    update_project::{__path_update_project, update_project},
    update_project_associate::{__path_update_project_associate, update_project_associate},
    validate_project_access::{__path_validate_project_access, validate_project_access},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(
    list_projects,
    get_project,
    create_project,
    update_project,
    delete_project,
    set_main_image,
    remove_main_image,
    set_availability_image,
    remove_availability_image,
    add_gallery_images,
    remove_gallery_image,
    add_amenity,
    update_amenity,
    remove_amenity,
    add_project_associate,
    update_project_associate,
    remove_project_associate,
    check_project_access,
    validate_project_access,
    get_project_docs,
    create_project_doc,
    remove_project_doc
))]
pub struct ProjectApiDoc;

pub fn project_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{root_path}/proyectos"),
            get(list_projects).post(create_project),
        )
        .route(
            &format!("{root_path}/proyectos/{{id}}"),
            get(get_project).put(update_project).delete(delete_project),
        )
        .route(
            &format!("{root_path}/proyectos/{{id}}/medios/principal"),
            put(set_main_image).delete(remove_main_image),
        )
        .route(
            &format!("{root_path}/proyectos/{{id}}/medios/disponibilidad"),
            put(set_availability_image).delete(remove_availability_image),
        )
        .route(
            &format!("{root_path}/proyectos/{{id}}/medios/galeria"),
            put(add_gallery_images),
        )
        .route(
            &format!("{root_path}/proyectos/{{id}}/medios/galeria/{{img}}"),
            delete(remove_gallery_image),
        )
        .route(
            &format!("{root_path}/proyectos/{{id}}/medios/amenidades"),
            put(add_amenity),
        )
        .route(
            &format!("{root_path}/proyectos/{{id}}/medios/amenidades/{{amenity_id}}"),
            put(update_amenity).delete(remove_amenity),
        )
        .route(
            &format!("{root_path}/proyectos/{{id}}/socios/{{associate_id}}"),
            put(update_project_associate)
                .post(add_project_associate)
                .delete(remove_project_associate),
        )
        .route(
            &format!("{root_path}/proyectos/{{id}}/acceso"),
            get(check_project_access).post(validate_project_access),
        )
        .route(
            &format!("{root_path}/proyectos/{{id}}/documentos"),
            get(get_project_docs).post(create_project_doc),
        )
        .route(
            &format!("{root_path}/proyectos/{{id}}/documentos/{{doc_id}}"),
            delete(remove_project_doc),
        )
}
