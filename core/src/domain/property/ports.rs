use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, pagination::PageRequest},
    property::{
        entities::{Property, PropertyPage},
        value_objects::{
            DeletePictureInput, NearbyDistance, PropertyFilter, PropertyInput,
            PropertyPicturesInput,
        },
    },
};

pub trait PropertyService: Send + Sync {
    fn search_properties(
        &self,
        filter: PropertyFilter,
        page: PageRequest,
    ) -> impl Future<Output = Result<PropertyPage, CoreError>> + Send;

    fn find_featured(&self) -> impl Future<Output = Result<Vec<Property>, CoreError>> + Send;

    /// Accepts either a uuid or a slug.
    fn find_property(
        &self,
        id_or_slug: String,
    ) -> impl Future<Output = Result<Property, CoreError>> + Send;

    fn find_nearby(
        &self,
        property: Property,
        distance: NearbyDistance,
    ) -> impl Future<Output = Result<Vec<Property>, CoreError>> + Send;

    fn create_property(
        &self,
        identity: Identity,
        input: PropertyInput,
    ) -> impl Future<Output = Result<Property, CoreError>> + Send;

    fn update_property(
        &self,
        identity: Identity,
        property_id: Uuid,
        input: PropertyInput,
    ) -> impl Future<Output = Result<Property, CoreError>> + Send;

    fn delete_property(
        &self,
        identity: Identity,
        property_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn upload_property_pictures(
        &self,
        identity: Identity,
        property_id: Uuid,
        input: PropertyPicturesInput,
    ) -> impl Future<Output = Result<Property, CoreError>> + Send;

    fn delete_property_picture(
        &self,
        identity: Identity,
        property_id: Uuid,
        input: DeletePictureInput,
    ) -> impl Future<Output = Result<Property, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait PropertyRepository: Send + Sync {
    /// Number of rows matching `filter`, using the same predicates as `find_page`.
    fn count(&self, filter: PropertyFilter) -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn find_page(
        &self,
        filter: PropertyFilter,
        page: PageRequest,
    ) -> impl Future<Output = Result<Vec<Property>, CoreError>> + Send;

    fn find_featured(
        &self,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<Property>, CoreError>> + Send;

    /// Loads the listing together with its agent's contact data.
    fn get_by_id(
        &self,
        property_id: Uuid,
    ) -> impl Future<Output = Result<Option<Property>, CoreError>> + Send;

    fn get_by_slug(
        &self,
        slug: String,
    ) -> impl Future<Output = Result<Option<Property>, CoreError>> + Send;

    /// Same contract listings within `radius_meters` of `origin`, closest first.
    fn find_nearby(
        &self,
        origin: Property,
        radius_meters: f64,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<Property>, CoreError>> + Send;

    fn create_property(
        &self,
        property: Property,
    ) -> impl Future<Output = Result<Property, CoreError>> + Send;

    fn update_property(
        &self,
        property: Property,
    ) -> impl Future<Output = Result<Property, CoreError>> + Send;

    fn delete_property(&self, property_id: Uuid)
    -> impl Future<Output = Result<(), CoreError>> + Send;
}
