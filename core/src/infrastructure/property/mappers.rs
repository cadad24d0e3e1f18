use chrono::Utc;
use sea_orm::ActiveValue::Set;

use crate::domain::property::entities::{AgentData, Property};
use crate::entity::{
    properties::{ActiveModel as PropertyActiveModel, Model as PropertyModel},
    users::Model as UserModel,
};

impl From<PropertyModel> for Property {
    fn from(model: PropertyModel) -> Self {
        Property {
            id: model.id,
            address: model.address,
            description: model.description,
            city: model.city,
            state: model.state,
            zip: model.zip,
            nb_hood: model.nb_hood,
            country: model.country,
            price: model.price,
            property_type: model.property_type,
            contract: model.contract,
            beds: model.beds,
            baths: model.baths,
            square_mt: model.square_mt,
            lot_size: model.lot_size,
            listing_date: model.listing_date.with_timezone(&Utc),
            year_built: model.year_built,
            status: model.status.parse().unwrap_or_default(),
            lat: model.lat,
            lon: model.lon,
            features: model.features,
            featured: model.featured,
            featured_expires_at: model.featured_expires_at.map(|dt| dt.with_timezone(&Utc)),
            main_img: model.main_img,
            imgs: model.imgs,
            agent: model.agent,
            slug: model.slug,
            agent_data: None,
        }
    }
}

impl From<&UserModel> for AgentData {
    fn from(user: &UserModel) -> Self {
        AgentData {
            name: format!("{} {}", user.name, user.lastname).trim().to_string(),
            phone: user.phone.clone().unwrap_or_default(),
            img: user.img.clone().unwrap_or_default(),
        }
    }
}

/// Listing joined with the optional owner row.
pub fn property_with_agent(model: PropertyModel, agent: Option<UserModel>) -> Property {
    let agent_data = agent.as_ref().map(AgentData::from);

    Property {
        agent_data,
        ..Property::from(model)
    }
}

impl From<Property> for PropertyActiveModel {
    fn from(property: Property) -> Self {
        PropertyActiveModel {
            id: Set(property.id),
            address: Set(property.address),
            description: Set(property.description),
            city: Set(property.city),
            state: Set(property.state),
            zip: Set(property.zip),
            nb_hood: Set(property.nb_hood),
            country: Set(property.country),
            price: Set(property.price),
            property_type: Set(property.property_type),
            contract: Set(property.contract),
            beds: Set(property.beds),
            baths: Set(property.baths),
            square_mt: Set(property.square_mt),
            lot_size: Set(property.lot_size),
            listing_date: Set(property.listing_date.fixed_offset()),
            year_built: Set(property.year_built),
            status: Set(property.status.as_str().to_string()),
            lat: Set(property.lat),
            lon: Set(property.lon),
            features: Set(property.features),
            featured: Set(property.featured),
            featured_expires_at: Set(property.featured_expires_at.map(|dt| dt.fixed_offset())),
            main_img: Set(property.main_img),
            imgs: Set(property.imgs),
            agent: Set(property.agent),
            slug: Set(property.slug),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    use super::*;
    use crate::domain::property::entities::PropertyStatus;

    fn property_model() -> PropertyModel {
        PropertyModel {
            id: Uuid::new_v4(),
            address: "Av. Constitución 100".to_string(),
            description: "Casa con jardín".to_string(),
            city: "Monterrey".to_string(),
            state: "Nuevo León".to_string(),
            zip: "64000".to_string(),
            nb_hood: "Centro".to_string(),
            country: "México".to_string(),
            price: 2_500_000.0,
            property_type: "casa".to_string(),
            contract: "venta".to_string(),
            beds: 3,
            baths: 2,
            square_mt: 180.0,
            lot_size: 220.0,
            listing_date: Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap().fixed_offset(),
            year_built: 2015,
            status: "en revisión".to_string(),
            lat: 25.67,
            lon: -100.31,
            features: serde_json::json!({"alberca": true}),
            featured: false,
            featured_expires_at: None,
            main_img: String::new(),
            imgs: vec!["pic-1.jpg".to_string()],
            agent: None,
            slug: "venta-av-constitucion-100".to_string(),
        }
    }

    #[test]
    fn test_model_maps_status_and_dates() {
        let property = Property::from(property_model());

        assert_eq!(property.status, PropertyStatus::PendingReview);
        assert_eq!(property.listing_date.to_rfc3339(), "2025-03-01T12:00:00+00:00");
        assert!(property.agent_data.is_none());
    }

    #[test]
    fn test_unknown_status_falls_back_to_draft() {
        let mut model = property_model();
        model.status = "???".to_string();

        assert_eq!(Property::from(model).status, PropertyStatus::Draft);
    }
}
