use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    associate::entities::ProjectAssociate,
    common::{generate_uuid_v7, slugify},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Amenity {
    pub id: Uuid,
    pub name: String,
    pub icon: String,
    pub img: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProjectDoc {
    pub id: Uuid,
    /// Stored file name.
    pub doc: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A multi-unit development. Image fields hold stored file names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Project {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub main_img: String,
    pub availability_img: String,
    pub gallery: Vec<String>,
    pub amenities: Vec<Amenity>,
    pub docs: Vec<ProjectDoc>,
    pub associates: Vec<ProjectAssociate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    pub fn new(name: String, description: String) -> Self {
        let now = Utc::now();

        Self {
            id: generate_uuid_v7(),
            slug: slugify(&name),
            name,
            description,
            main_img: String::new(),
            availability_img: String::new(),
            gallery: Vec::new(),
            amenities: Vec::new(),
            docs: Vec::new(),
            associates: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn rename(&mut self, name: String, description: String) {
        self.slug = slugify(&name);
        self.name = name;
        self.description = description;
        self.touch();
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn amenity_mut(&mut self, amenity_id: Uuid) -> Option<&mut Amenity> {
        self.amenities.iter_mut().find(|amenity| amenity.id == amenity_id)
    }

    pub fn take_amenity(&mut self, amenity_id: Uuid) -> Option<Amenity> {
        let idx = self.amenities.iter().position(|a| a.id == amenity_id)?;
        Some(self.amenities.remove(idx))
    }

    pub fn take_doc(&mut self, doc_id: Uuid) -> Option<ProjectDoc> {
        let idx = self.docs.iter().position(|d| d.id == doc_id)?;
        Some(self.docs.remove(idx))
    }

    pub fn take_gallery_image(&mut self, name: &str) -> Option<String> {
        let idx = self.gallery.iter().position(|img| img == name)?;
        Some(self.gallery.remove(idx))
    }

    /// Every stored file referenced by the project.
    pub fn media_files(&self) -> Vec<String> {
        [self.main_img.clone(), self.availability_img.clone()]
            .into_iter()
            .chain(self.gallery.iter().cloned())
            .chain(self.amenities.iter().map(|a| a.img.clone()))
            .chain(self.docs.iter().map(|d| d.doc.clone()))
            .filter(|name| !name.is_empty())
            .collect()
    }
}
