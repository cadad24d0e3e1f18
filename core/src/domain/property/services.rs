use chrono::Utc;
use tracing::{error, instrument, warn};
use uuid::Uuid;

use crate::domain::{
    associate::ports::AssociateRepository,
    authentication::{ports::TokenIssuer, value_objects::Identity},
    common::{
        entities::app_errors::CoreError,
        pagination::{PageRequest, Pagination},
        services::Service,
    },
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    notification::ports::Notifier,
    project::ports::ProjectRepository,
    property::{
        entities::{Property, PropertyPage},
        policies::{ensure_can_manage, ensure_can_publish},
        ports::{PropertyRepository, PropertyService},
        value_objects::{
            DeletePictureInput, FEATURED_LIMIT, NEARBY_LIMIT, NearbyDistance, PictureKind,
            PropertyFilter, PropertyInput, PropertyPicturesInput,
        },
    },
    request::ports::RequestRepository,
    storage::{
        ports::MediaStorage,
        value_objects::{MediaArea, ensure_safe_name},
    },
    user::ports::UserRepository,
};

impl<P, PJ, A, RQ, U, H, T, HC, MS, N> Service<P, PJ, A, RQ, U, H, T, HC, MS, N>
where
    P: PropertyRepository,
    MS: MediaStorage,
{
    async fn load_property(&self, property_id: Uuid) -> Result<Property, CoreError> {
        self.property_repository
            .get_by_id(property_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn remove_property_file(&self, property_id: Uuid, name: &str) -> Result<(), CoreError> {
        ensure_safe_name(name)?;
        self.media_storage
            .delete(MediaArea::Properties, &format!("{property_id}/{name}"))
            .await
    }
}

impl<P, PJ, A, RQ, U, H, T, HC, MS, N> PropertyService for Service<P, PJ, A, RQ, U, H, T, HC, MS, N>
where
    P: PropertyRepository,
    PJ: ProjectRepository,
    A: AssociateRepository,
    RQ: RequestRepository,
    U: UserRepository,
    H: HasherRepository,
    T: TokenIssuer,
    HC: HealthCheckRepository,
    MS: MediaStorage,
    N: Notifier,
{
    #[instrument(skip(self, filter), fields(page = page.page, per_page = page.per_page))]
    async fn search_properties(
        &self,
        filter: PropertyFilter,
        page: PageRequest,
    ) -> Result<PropertyPage, CoreError> {
        let total = self.property_repository.count(filter.clone()).await?;
        let properties = self.property_repository.find_page(filter, page).await?;

        Ok(PropertyPage {
            properties,
            pagination: Pagination::from_request(total, page),
        })
    }

    async fn find_featured(&self) -> Result<Vec<Property>, CoreError> {
        self.property_repository.find_featured(FEATURED_LIMIT).await
    }

    #[instrument(skip(self))]
    async fn find_property(&self, id_or_slug: String) -> Result<Property, CoreError> {
        let property = match Uuid::parse_str(&id_or_slug) {
            Ok(id) => self.property_repository.get_by_id(id).await?,
            Err(_) => self.property_repository.get_by_slug(id_or_slug).await?,
        };

        property.ok_or(CoreError::NotFound)
    }

    #[instrument(skip(self, property), fields(property_id = %property.id))]
    async fn find_nearby(
        &self,
        property: Property,
        distance: NearbyDistance,
    ) -> Result<Vec<Property>, CoreError> {
        self.property_repository
            .find_nearby(property, distance.meters(), NEARBY_LIMIT)
            .await
    }

    #[instrument(skip(self, identity, input), fields(agent = %identity.id))]
    async fn create_property(
        &self,
        identity: Identity,
        input: PropertyInput,
    ) -> Result<Property, CoreError> {
        ensure_can_publish(&identity)?;

        let property = Property::new(identity.id(), input);
        let property = self.property_repository.create_property(property).await?;

        self.media_storage
            .create_dir(MediaArea::Properties, &property.id.to_string())
            .await?;

        Ok(property)
    }

    #[instrument(skip(self, identity, input), fields(agent = %identity.id))]
    async fn update_property(
        &self,
        identity: Identity,
        property_id: Uuid,
        input: PropertyInput,
    ) -> Result<Property, CoreError> {
        let mut property = self.load_property(property_id).await?;
        ensure_can_manage(&identity, &property)?;

        property.apply(input);
        if property.slug.is_empty() {
            property.refresh_slug();
        }

        self.property_repository.update_property(property).await
    }

    #[instrument(skip(self, identity), fields(agent = %identity.id))]
    async fn delete_property(&self, identity: Identity, property_id: Uuid) -> Result<(), CoreError> {
        let property = self.load_property(property_id).await?;
        ensure_can_manage(&identity, &property)?;

        self.property_repository.delete_property(property_id).await?;

        if let Err(e) = self
            .media_storage
            .remove_dir(MediaArea::Properties, &property_id.to_string())
            .await
        {
            warn!("Failed to remove media of property {}: {}", property_id, e);
        }

        Ok(())
    }

    #[instrument(
        skip(self, identity, input),
        fields(
            agent = %identity.id,
            pictures = input.pictures.len(),
            deleted = input.delete_pictures.len()
        )
    )]
    async fn upload_property_pictures(
        &self,
        identity: Identity,
        property_id: Uuid,
        input: PropertyPicturesInput,
    ) -> Result<Property, CoreError> {
        let mut property = self.load_property(property_id).await?;
        ensure_can_manage(&identity, &property)?;

        let stamp = Utc::now().format("%Y%m%d-%H%M%S").to_string();

        for (idx, picture) in input.pictures.into_iter().enumerate() {
            let name = format!("pic-{stamp}-{idx}{}", picture.extension());
            self.media_storage
                .put(
                    MediaArea::Properties,
                    &format!("{property_id}/{name}"),
                    picture.data,
                )
                .await?;
            property.imgs.push(name);
        }

        if let Some(main) = input.main_picture {
            let name = format!("main-pic-{stamp}{}", main.extension());
            self.media_storage
                .put(
                    MediaArea::Properties,
                    &format!("{property_id}/{name}"),
                    main.data,
                )
                .await?;
            property.main_img = name;
        }

        for name in input.delete_pictures {
            if let Some(idx) = property.imgs.iter().position(|img| img == &name) {
                property.imgs.remove(idx);
                self.remove_property_file(property_id, &name).await?;
            }
        }

        self.property_repository.update_property(property).await
    }

    #[instrument(skip(self, identity), fields(agent = %identity.id))]
    async fn delete_property_picture(
        &self,
        identity: Identity,
        property_id: Uuid,
        input: DeletePictureInput,
    ) -> Result<Property, CoreError> {
        let mut property = self.load_property(property_id).await?;
        ensure_can_manage(&identity, &property)?;

        match input.kind {
            PictureKind::Main => {
                if property.main_img != input.img_name || property.main_img.is_empty() {
                    return Err(CoreError::NotFound);
                }
                property.main_img.clear();
            }
            PictureKind::Gallery => {
                let idx = property
                    .imgs
                    .iter()
                    .position(|img| img == &input.img_name)
                    .ok_or(CoreError::NotFound)?;
                property.imgs.remove(idx);
            }
        }

        let property = self.property_repository.update_property(property).await?;

        self.remove_property_file(property_id, &input.img_name)
            .await
            .map_err(|e| {
                error!("Failed to delete picture {}: {}", input.img_name, e);
                e
            })?;

        Ok(property)
    }
}
