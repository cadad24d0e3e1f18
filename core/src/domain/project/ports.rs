use uuid::Uuid;

use crate::domain::{
    associate::{
        entities::ProjectAssociate,
        value_objects::{AssociateLinkInput, NewProjectAssociate},
    },
    authentication::{
        entities::ProjectAccessGrant,
        value_objects::{Identity, ProjectAccessInput},
    },
    common::entities::app_errors::CoreError,
    project::{
        entities::{Project, ProjectDoc},
        value_objects::{AmenityInput, CreateProjectInput, ProjectDocInput, UpdateProjectInput},
    },
    storage::entities::UploadedFile,
};

pub trait ProjectService: Send + Sync {
    fn list_projects(&self) -> impl Future<Output = Result<Vec<Project>, CoreError>> + Send;

    fn find_project(
        &self,
        id_or_slug: String,
    ) -> impl Future<Output = Result<Project, CoreError>> + Send;

    fn create_project(
        &self,
        identity: Identity,
        input: CreateProjectInput,
    ) -> impl Future<Output = Result<Project, CoreError>> + Send;

    fn update_project(
        &self,
        identity: Identity,
        project_id: Uuid,
        input: UpdateProjectInput,
    ) -> impl Future<Output = Result<Project, CoreError>> + Send;

    fn delete_project(
        &self,
        identity: Identity,
        project_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn add_project_associate(
        &self,
        identity: Identity,
        project_id: Uuid,
        associate_id: Uuid,
        link: AssociateLinkInput,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn update_project_associate(
        &self,
        identity: Identity,
        project_id: Uuid,
        associate_id: Uuid,
        pending_payment: bool,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn remove_project_associate(
        &self,
        identity: Identity,
        project_id: Uuid,
        associate_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn set_main_image(
        &self,
        identity: Identity,
        project_id: Uuid,
        file: UploadedFile,
    ) -> impl Future<Output = Result<Project, CoreError>> + Send;

    fn remove_main_image(
        &self,
        identity: Identity,
        project_id: Uuid,
    ) -> impl Future<Output = Result<Project, CoreError>> + Send;

    fn set_availability_image(
        &self,
        identity: Identity,
        project_id: Uuid,
        file: UploadedFile,
    ) -> impl Future<Output = Result<Project, CoreError>> + Send;

    fn remove_availability_image(
        &self,
        identity: Identity,
        project_id: Uuid,
    ) -> impl Future<Output = Result<Project, CoreError>> + Send;

    fn add_gallery_images(
        &self,
        identity: Identity,
        project_id: Uuid,
        files: Vec<UploadedFile>,
    ) -> impl Future<Output = Result<Project, CoreError>> + Send;

    fn remove_gallery_image(
        &self,
        identity: Identity,
        project_id: Uuid,
        img_name: String,
    ) -> impl Future<Output = Result<Project, CoreError>> + Send;

    fn add_amenity(
        &self,
        identity: Identity,
        project_id: Uuid,
        input: AmenityInput,
    ) -> impl Future<Output = Result<Project, CoreError>> + Send;

    fn update_amenity(
        &self,
        identity: Identity,
        project_id: Uuid,
        amenity_id: Uuid,
        input: AmenityInput,
    ) -> impl Future<Output = Result<Project, CoreError>> + Send;

    fn remove_amenity(
        &self,
        identity: Identity,
        project_id: Uuid,
        amenity_id: Uuid,
    ) -> impl Future<Output = Result<Project, CoreError>> + Send;

    fn create_project_doc(
        &self,
        identity: Identity,
        project_id: Uuid,
        input: ProjectDocInput,
    ) -> impl Future<Output = Result<ProjectDoc, CoreError>> + Send;

    fn remove_project_doc(
        &self,
        identity: Identity,
        project_id: Uuid,
        doc_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Grants document access to an associate of the project.
    fn validate_project_access(
        &self,
        id_or_slug: String,
        input: ProjectAccessInput,
    ) -> impl Future<Output = Result<ProjectAccessGrant, CoreError>> + Send;

    /// Verifies a project access token against the project and the current associate records.
    fn check_project_access(
        &self,
        id_or_slug: String,
        token: String,
    ) -> impl Future<Output = Result<ProjectAssociate, CoreError>> + Send;

    fn get_project_docs(
        &self,
        id_or_slug: String,
        token: String,
    ) -> impl Future<Output = Result<Vec<ProjectDoc>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ProjectRepository: Send + Sync {
    fn list_projects(&self) -> impl Future<Output = Result<Vec<Project>, CoreError>> + Send;

    /// Loads the project with its associates.
    fn get_by_id(
        &self,
        project_id: Uuid,
    ) -> impl Future<Output = Result<Option<Project>, CoreError>> + Send;

    fn get_by_slug(
        &self,
        slug: String,
    ) -> impl Future<Output = Result<Option<Project>, CoreError>> + Send;

    /// Inserts the project, its new associates and their links in one transaction.
    fn create_project(
        &self,
        project: Project,
        associates: Vec<NewProjectAssociate>,
    ) -> impl Future<Output = Result<Project, CoreError>> + Send;

    /// Persists every column of the project row, media fields included.
    fn update_project(
        &self,
        project: Project,
    ) -> impl Future<Output = Result<Project, CoreError>> + Send;

    fn delete_project(&self, project_id: Uuid)
    -> impl Future<Output = Result<(), CoreError>> + Send;

    fn add_associate(
        &self,
        project_id: Uuid,
        associate_id: Uuid,
        link: AssociateLinkInput,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn update_associate_payment(
        &self,
        project_id: Uuid,
        associate_id: Uuid,
        pending_payment: bool,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn remove_associate(
        &self,
        project_id: Uuid,
        associate_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Associate of `project_id` whose RFC or CURP is `id_code`, holding the given lot.
    fn find_associate_access(
        &self,
        project_id: Uuid,
        id_code: String,
        lot_num: String,
        apple_num: String,
    ) -> impl Future<Output = Result<Option<ProjectAssociate>, CoreError>> + Send;
}
