pub mod create_property;
pub mod delete_property;
pub mod delete_property_picture;
pub mod get_featured_properties;
pub mod get_panel_property;
pub mod get_property_with_nearby;
pub mod search_contract_properties;
pub mod search_properties;
pub mod update_property;
pub mod upload_property_pictures;
