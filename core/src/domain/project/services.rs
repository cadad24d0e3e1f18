use chrono::{DateTime, Duration, Utc};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::domain::{
    associate::{
        entities::ProjectAssociate,
        ports::AssociateRepository,
        value_objects::AssociateLinkInput,
    },
    authentication::{
        entities::{PROJECT_ACCESS_TTL_HOURS, ProjectAccessClaims, ProjectAccessGrant},
        ports::TokenIssuer,
        value_objects::{Identity, ProjectAccessInput},
    },
    common::{entities::app_errors::CoreError, generate_uuid_v7, services::Service, slugify},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    notification::ports::Notifier,
    project::{
        entities::{Amenity, Project, ProjectDoc},
        policies::ensure_can_manage_projects,
        ports::{ProjectRepository, ProjectService},
        value_objects::{AmenityInput, CreateProjectInput, ProjectDocInput, UpdateProjectInput},
    },
    property::ports::PropertyRepository,
    request::ports::RequestRepository,
    storage::{
        entities::UploadedFile,
        ports::MediaStorage,
        value_objects::{MAX_UPLOAD_SIZE, MediaArea, ensure_safe_name},
    },
    user::ports::UserRepository,
};

fn ensure_upload_size(file: &UploadedFile) -> Result<(), CoreError> {
    if file.size() > MAX_UPLOAD_SIZE {
        return Err(CoreError::InvalidInput(format!(
            "{} exceeds the {} MiB upload limit",
            file.file_name,
            MAX_UPLOAD_SIZE >> 20
        )));
    }
    Ok(())
}

impl<P, PJ, A, RQ, U, H, T, HC, MS, N> Service<P, PJ, A, RQ, U, H, T, HC, MS, N>
where
    PJ: ProjectRepository,
    T: TokenIssuer,
    MS: MediaStorage,
{
    async fn load_project(&self, project_id: Uuid) -> Result<Project, CoreError> {
        self.project_repository
            .get_by_id(project_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn resolve_project(&self, id_or_slug: String) -> Result<Project, CoreError> {
        let project = match Uuid::parse_str(&id_or_slug) {
            Ok(id) => self.project_repository.get_by_id(id).await?,
            Err(_) => self.project_repository.get_by_slug(id_or_slug).await?,
        };

        project.ok_or(CoreError::NotFound)
    }

    /// Writes `file` to the uploads area as `{name}{ext}` and returns the stored name.
    async fn store_project_file(&self, name: String, file: UploadedFile) -> Result<String, CoreError> {
        ensure_upload_size(&file)?;

        let stored_name = format!("{name}{}", file.extension());
        ensure_safe_name(&stored_name)?;

        self.media_storage
            .put(MediaArea::Uploads, &stored_name, file.data)
            .await?;

        Ok(stored_name)
    }

    async fn discard_project_file(&self, name: &str) -> Result<(), CoreError> {
        if name.is_empty() {
            return Ok(());
        }
        ensure_safe_name(name)?;
        self.media_storage.delete(MediaArea::Uploads, name).await
    }

    async fn verify_project_token(
        &self,
        project: &Project,
        token: &str,
    ) -> Result<ProjectAssociate, CoreError> {
        let claims = self
            .token_issuer
            .verify_project_access(token)
            .map_err(|_| CoreError::Unauthorized)?;

        if claims.project_id != project.id {
            return Err(CoreError::Unauthorized);
        }

        self.project_repository
            .find_associate_access(project.id, claims.id_code, claims.lot_num, claims.apple_num)
            .await?
            .ok_or(CoreError::Unauthorized)
    }
}

impl<P, PJ, A, RQ, U, H, T, HC, MS, N> ProjectService for Service<P, PJ, A, RQ, U, H, T, HC, MS, N>
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
    async fn list_projects(&self) -> Result<Vec<Project>, CoreError> {
        self.project_repository.list_projects().await
    }

    #[instrument(skip(self))]
    async fn find_project(&self, id_or_slug: String) -> Result<Project, CoreError> {
        self.resolve_project(id_or_slug).await
    }

    #[instrument(skip(self, identity, input), fields(associates = input.associates.len()))]
    async fn create_project(
        &self,
        identity: Identity,
        input: CreateProjectInput,
    ) -> Result<Project, CoreError> {
        ensure_can_manage_projects(&identity)?;

        if input.name.trim().is_empty() {
            return Err(CoreError::InvalidInput("name is required".to_string()));
        }
        if input
            .associates
            .iter()
            .any(|new| new.associate.rfc.trim().is_empty() && new.associate.curp.trim().is_empty())
        {
            return Err(CoreError::MissingAssociateIdentifier);
        }

        let project = Project::new(input.name, input.description);
        let project = self
            .project_repository
            .create_project(project, input.associates)
            .await?;

        info!(project_id = %project.id, "Project created");
        Ok(project)
    }

    #[instrument(skip(self, identity, input))]
    async fn update_project(
        &self,
        identity: Identity,
        project_id: Uuid,
        input: UpdateProjectInput,
    ) -> Result<Project, CoreError> {
        ensure_can_manage_projects(&identity)?;

        if input.name.trim().is_empty() {
            return Err(CoreError::InvalidInput("name is required".to_string()));
        }

        let mut project = self.load_project(project_id).await?;
        project.rename(input.name, input.description);

        self.project_repository.update_project(project).await
    }

    #[instrument(skip(self, identity))]
    async fn delete_project(&self, identity: Identity, project_id: Uuid) -> Result<(), CoreError> {
        ensure_can_manage_projects(&identity)?;

        let project = self.load_project(project_id).await?;
        self.project_repository.delete_project(project_id).await?;

        for name in project.media_files() {
            if let Err(e) = self.discard_project_file(&name).await {
                warn!("Failed to delete project file {}: {}", name, e);
            }
        }

        Ok(())
    }

    #[instrument(skip(self, identity, link))]
    async fn add_project_associate(
        &self,
        identity: Identity,
        project_id: Uuid,
        associate_id: Uuid,
        link: AssociateLinkInput,
    ) -> Result<(), CoreError> {
        ensure_can_manage_projects(&identity)?;

        self.load_project(project_id).await?;
        self.associate_repository
            .get_by_id(associate_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.project_repository
            .add_associate(project_id, associate_id, link)
            .await
    }

    #[instrument(skip(self, identity))]
    async fn update_project_associate(
        &self,
        identity: Identity,
        project_id: Uuid,
        associate_id: Uuid,
        pending_payment: bool,
    ) -> Result<(), CoreError> {
        ensure_can_manage_projects(&identity)?;

        self.project_repository
            .update_associate_payment(project_id, associate_id, pending_payment)
            .await
    }

    #[instrument(skip(self, identity))]
    async fn remove_project_associate(
        &self,
        identity: Identity,
        project_id: Uuid,
        associate_id: Uuid,
    ) -> Result<(), CoreError> {
        ensure_can_manage_projects(&identity)?;

        self.project_repository
            .remove_associate(project_id, associate_id)
            .await
    }

    #[instrument(skip(self, identity, file))]
    async fn set_main_image(
        &self,
        identity: Identity,
        project_id: Uuid,
        file: UploadedFile,
    ) -> Result<Project, CoreError> {
        ensure_can_manage_projects(&identity)?;

        let mut project = self.load_project(project_id).await?;
        let stored = self
            .store_project_file(format!("{}-main-img", project.slug), file)
            .await?;

        if project.main_img != stored {
            self.discard_project_file(&project.main_img).await?;
        }
        project.main_img = stored;
        project.touch();

        self.project_repository.update_project(project).await
    }

    #[instrument(skip(self, identity))]
    async fn remove_main_image(&self, identity: Identity, project_id: Uuid) -> Result<Project, CoreError> {
        ensure_can_manage_projects(&identity)?;

        let mut project = self.load_project(project_id).await?;
        self.discard_project_file(&project.main_img).await?;
        project.main_img.clear();
        project.touch();

        self.project_repository.update_project(project).await
    }

    #[instrument(skip(self, identity, file))]
    async fn set_availability_image(
        &self,
        identity: Identity,
        project_id: Uuid,
        file: UploadedFile,
    ) -> Result<Project, CoreError> {
        ensure_can_manage_projects(&identity)?;

        let mut project = self.load_project(project_id).await?;
        let stored = self
            .store_project_file(format!("{}-disponibilidad", project.slug), file)
            .await?;

        if project.availability_img != stored {
            self.discard_project_file(&project.availability_img).await?;
        }
        project.availability_img = stored;
        project.touch();

        self.project_repository.update_project(project).await
    }

    #[instrument(skip(self, identity))]
    async fn remove_availability_image(
        &self,
        identity: Identity,
        project_id: Uuid,
    ) -> Result<Project, CoreError> {
        ensure_can_manage_projects(&identity)?;

        let mut project = self.load_project(project_id).await?;
        self.discard_project_file(&project.availability_img).await?;
        project.availability_img.clear();
        project.touch();

        self.project_repository.update_project(project).await
    }

    #[instrument(skip(self, identity, files), fields(files = files.len()))]
    async fn add_gallery_images(
        &self,
        identity: Identity,
        project_id: Uuid,
        files: Vec<UploadedFile>,
    ) -> Result<Project, CoreError> {
        ensure_can_manage_projects(&identity)?;

        if files.is_empty() {
            return Err(CoreError::InvalidInput("no files were received".to_string()));
        }

        let mut project = self.load_project(project_id).await?;
        let stamp = Utc::now().format("%Y%m%d%H%M%S").to_string();

        for (idx, file) in files.into_iter().enumerate() {
            let stored = self
                .store_project_file(format!("{}-galeria-{stamp}-{idx}", project.slug), file)
                .await?;
            project.gallery.push(stored);
        }
        project.touch();

        self.project_repository.update_project(project).await
    }

    #[instrument(skip(self, identity))]
    async fn remove_gallery_image(
        &self,
        identity: Identity,
        project_id: Uuid,
        img_name: String,
    ) -> Result<Project, CoreError> {
        ensure_can_manage_projects(&identity)?;

        let mut project = self.load_project(project_id).await?;
        let removed = project
            .take_gallery_image(&img_name)
            .ok_or(CoreError::NotFound)?;
        project.touch();

        let project = self.project_repository.update_project(project).await?;
        self.discard_project_file(&removed).await?;

        Ok(project)
    }

    #[instrument(skip(self, identity, input), fields(name = %input.name))]
    async fn add_amenity(
        &self,
        identity: Identity,
        project_id: Uuid,
        input: AmenityInput,
    ) -> Result<Project, CoreError> {
        ensure_can_manage_projects(&identity)?;

        if input.name.trim().is_empty() {
            return Err(CoreError::InvalidInput("amenity name is required".to_string()));
        }

        let mut project = self.load_project(project_id).await?;
        let mut amenity = Amenity {
            id: generate_uuid_v7(),
            name: input.name,
            icon: input.icon,
            img: String::new(),
        };

        if let Some(file) = input.img {
            amenity.img = self
                .store_project_file(format!("{}-amenidad-{}", project.slug, amenity.id), file)
                .await?;
        }

        project.amenities.push(amenity);
        project.touch();

        self.project_repository.update_project(project).await
    }

    #[instrument(skip(self, identity, input))]
    async fn update_amenity(
        &self,
        identity: Identity,
        project_id: Uuid,
        amenity_id: Uuid,
        input: AmenityInput,
    ) -> Result<Project, CoreError> {
        ensure_can_manage_projects(&identity)?;

        let mut project = self.load_project(project_id).await?;
        let slug = project.slug.clone();
        let previous_img = project
            .amenity_mut(amenity_id)
            .map(|amenity| amenity.img.clone())
            .ok_or(CoreError::NotFound)?;

        let new_img = match input.img {
            Some(file) => Some(
                self.store_project_file(format!("{slug}-amenidad-{amenity_id}"), file)
                    .await?,
            ),
            None => None,
        };

        if new_img.as_ref().is_some_and(|stored| stored != &previous_img) {
            self.discard_project_file(&previous_img).await?;
        }

        if let Some(amenity) = project.amenity_mut(amenity_id) {
            amenity.name = input.name;
            amenity.icon = input.icon;
            if let Some(stored) = new_img {
                amenity.img = stored;
            }
        }
        project.touch();

        self.project_repository.update_project(project).await
    }

    #[instrument(skip(self, identity))]
    async fn remove_amenity(
        &self,
        identity: Identity,
        project_id: Uuid,
        amenity_id: Uuid,
    ) -> Result<Project, CoreError> {
        ensure_can_manage_projects(&identity)?;

        let mut project = self.load_project(project_id).await?;
        let amenity = project.take_amenity(amenity_id).ok_or(CoreError::NotFound)?;
        project.touch();

        let project = self.project_repository.update_project(project).await?;
        self.discard_project_file(&amenity.img).await?;

        Ok(project)
    }

    #[instrument(skip(self, identity, input), fields(filename = %input.filename))]
    async fn create_project_doc(
        &self,
        identity: Identity,
        project_id: Uuid,
        input: ProjectDocInput,
    ) -> Result<ProjectDoc, CoreError> {
        ensure_can_manage_projects(&identity)?;

        let filename = slugify(&input.filename);
        if filename.is_empty() {
            return Err(CoreError::InvalidInput("filename is required".to_string()));
        }

        let mut project = self.load_project(project_id).await?;
        let stored = self
            .store_project_file(format!("{}-{filename}", project.slug), input.file)
            .await?;

        let now = Utc::now();
        let doc = ProjectDoc {
            id: generate_uuid_v7(),
            doc: stored,
            description: input.description,
            created_at: now,
            updated_at: now,
        };
        project.docs.push(doc.clone());
        project.touch();

        self.project_repository.update_project(project).await?;

        Ok(doc)
    }

    #[instrument(skip(self, identity))]
    async fn remove_project_doc(
        &self,
        identity: Identity,
        project_id: Uuid,
        doc_id: Uuid,
    ) -> Result<(), CoreError> {
        ensure_can_manage_projects(&identity)?;

        let mut project = self.load_project(project_id).await?;
        let doc = project.take_doc(doc_id).ok_or(CoreError::NotFound)?;
        project.touch();

        self.project_repository.update_project(project).await?;
        self.discard_project_file(&doc.doc).await
    }

    #[instrument(skip(self, input), fields(lot = %input.lot_num, apple = %input.apple_num))]
    async fn validate_project_access(
        &self,
        id_or_slug: String,
        input: ProjectAccessInput,
    ) -> Result<ProjectAccessGrant, CoreError> {
        if input.id_code.trim().is_empty() {
            return Err(CoreError::InvalidInput("RFC or CURP is required".to_string()));
        }

        let project = self.resolve_project(id_or_slug).await?;
        let associate = self
            .project_repository
            .find_associate_access(
                project.id,
                input.id_code.clone(),
                input.lot_num.clone(),
                input.apple_num.clone(),
            )
            .await?
            .ok_or_else(|| {
                warn!(project_id = %project.id, "Project access denied");
                CoreError::Unauthorized
            })?;

        let expires_at = Utc::now() + Duration::hours(PROJECT_ACCESS_TTL_HOURS);
        let claims = ProjectAccessClaims {
            project_id: project.id,
            associate_id: associate.id,
            id_code: input.id_code,
            lot_num: input.lot_num,
            apple_num: input.apple_num,
            exp: expires_at.timestamp(),
        };
        let token = self.token_issuer.sign_project_access(&claims)?;

        Ok(ProjectAccessGrant {
            token,
            expires_at: DateTime::<Utc>::from_timestamp(claims.exp, 0).unwrap_or(expires_at),
            associate,
        })
    }

    async fn check_project_access(
        &self,
        id_or_slug: String,
        token: String,
    ) -> Result<ProjectAssociate, CoreError> {
        let project = self.resolve_project(id_or_slug).await?;
        self.verify_project_token(&project, &token).await
    }

    async fn get_project_docs(
        &self,
        id_or_slug: String,
        token: String,
    ) -> Result<Vec<ProjectDoc>, CoreError> {
        let project = self.resolve_project(id_or_slug).await?;
        self.verify_project_token(&project, &token).await?;

        Ok(project.docs)
    }
}
