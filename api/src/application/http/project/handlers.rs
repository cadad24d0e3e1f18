pub mod add_amenity;
pub mod add_gallery_images;
pub mod add_project_associate;
pub mod check_project_access;
pub mod create_project;
pub mod create_project_doc;
pub mod delete_project;
pub mod get_project;
pub mod get_project_docs;
pub mod list_projects;
pub mod remove_amenity;
pub mod remove_availability_image;
pub mod remove_gallery_image;
pub mod remove_main_image;
pub mod remove_project_associate;
pub mod remove_project_doc;
pub mod set_availability_image;
pub mod set_main_image;
pub mod update_amenity;
pub mod update_project;
pub mod update_project_associate;
pub mod validate_project_access;
