use crate::domain::{associate::value_objects::NewProjectAssociate, storage::entities::UploadedFile};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectInput {
    pub name: String,
    pub description: String,
    pub associates: Vec<NewProjectAssociate>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateProjectInput {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct AmenityInput {
    pub name: String,
    pub icon: String,
    pub img: Option<UploadedFile>,
}

#[derive(Debug, Clone)]
pub struct ProjectDocInput {
    pub file: UploadedFile,
    pub filename: String,
    pub description: String,
}
