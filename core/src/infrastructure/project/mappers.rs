use chrono::Utc;
use sea_orm::ActiveValue::Set;
use tracing::warn;

use crate::domain::project::entities::Project;
use crate::entity::projects::{ActiveModel as ProjectActiveModel, Model as ProjectModel};

fn json_list<T: serde::de::DeserializeOwned>(value: serde_json::Value, field: &str) -> Vec<T> {
    serde_json::from_value(value).unwrap_or_else(|e| {
        warn!("Ignoring malformed project {}: {}", field, e);
        Vec::new()
    })
}

impl From<ProjectModel> for Project {
    fn from(model: ProjectModel) -> Self {
        Project {
            id: model.id,
            slug: model.slug,
            name: model.name,
            description: model.description,
            main_img: model.main_img,
            availability_img: model.availability_img,
            gallery: model.gallery,
            amenities: json_list(model.amenities, "amenities"),
            docs: json_list(model.docs, "docs"),
            associates: Vec::new(),
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

impl From<&Project> for ProjectActiveModel {
    fn from(project: &Project) -> Self {
        ProjectActiveModel {
            id: Set(project.id),
            slug: Set(project.slug.clone()),
            name: Set(project.name.clone()),
            description: Set(project.description.clone()),
            main_img: Set(project.main_img.clone()),
            availability_img: Set(project.availability_img.clone()),
            gallery: Set(project.gallery.clone()),
            amenities: Set(serde_json::to_value(&project.amenities).unwrap_or_default()),
            docs: Set(serde_json::to_value(&project.docs).unwrap_or_default()),
            created_at: Set(project.created_at.fixed_offset()),
            updated_at: Set(project.updated_at.fixed_offset()),
        }
    }
}
