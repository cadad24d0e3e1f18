use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::{
    entities::app_errors::CoreError, generate_uuid_v7, pagination::Pagination, slugify,
};

use super::value_objects::PropertyInput;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum PropertyStatus {
    #[default]
    #[serde(rename = "borrador")]
    Draft,
    #[serde(rename = "archivada")]
    Archived,
    #[serde(rename = "publicada")]
    Published,
    #[serde(rename = "en revisión")]
    PendingReview,
    #[serde(rename = "vendida")]
    Sold,
    #[serde(rename = "inactiva")]
    Inactive,
}

impl PropertyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyStatus::Draft => "borrador",
            PropertyStatus::Archived => "archivada",
            PropertyStatus::Published => "publicada",
            PropertyStatus::PendingReview => "en revisión",
            PropertyStatus::Sold => "vendida",
            PropertyStatus::Inactive => "inactiva",
        }
    }
}

impl fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyStatus {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "borrador" => Ok(PropertyStatus::Draft),
            "archivada" => Ok(PropertyStatus::Archived),
            "publicada" => Ok(PropertyStatus::Published),
            "en revisión" => Ok(PropertyStatus::PendingReview),
            "vendida" => Ok(PropertyStatus::Sold),
            "inactiva" => Ok(PropertyStatus::Inactive),
            other => Err(CoreError::InvalidInput(format!(
                "unknown property status: {other}"
            ))),
        }
    }
}

/// Public contact details of the agent owning a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AgentData {
    pub name: String,
    pub phone: String,
    pub img: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: Uuid,
    pub address: String,
    pub description: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub nb_hood: String,
    pub country: String,
    pub price: f64,
    pub property_type: String,
    pub contract: String,
    pub beds: i32,
    pub baths: i32,
    #[serde(rename = "sqMt")]
    pub square_mt: f64,
    pub lot_size: f64,
    pub listing_date: DateTime<Utc>,
    pub year_built: i32,
    pub status: PropertyStatus,
    pub lat: f64,
    pub lon: f64,
    #[schema(value_type = Object)]
    pub features: serde_json::Value,
    pub featured: bool,
    pub featured_expires_at: Option<DateTime<Utc>>,
    pub main_img: String,
    pub imgs: Vec<String>,
    pub agent: Option<Uuid>,
    pub slug: String,
    pub agent_data: Option<AgentData>,
}

impl Property {
    pub fn new(agent: Uuid, input: PropertyInput) -> Self {
        let mut property = Self {
            id: generate_uuid_v7(),
            address: String::new(),
            description: String::new(),
            city: String::new(),
            state: String::new(),
            zip: String::new(),
            nb_hood: String::new(),
            country: String::new(),
            price: 0.0,
            property_type: String::new(),
            contract: String::new(),
            beds: 0,
            baths: 0,
            square_mt: 0.0,
            lot_size: 0.0,
            listing_date: Utc::now(),
            year_built: 0,
            status: PropertyStatus::default(),
            lat: 0.0,
            lon: 0.0,
            features: serde_json::Value::Object(Default::default()),
            featured: false,
            featured_expires_at: None,
            main_img: String::new(),
            imgs: Vec::new(),
            agent: Some(agent),
            slug: String::new(),
            agent_data: None,
        };

        property.apply(input);
        property.refresh_slug();
        property
    }

    /// Replaces the editable fields. Agent, images and slug are left untouched.
    pub fn apply(&mut self, input: PropertyInput) {
        self.address = input.address;
        self.description = input.description;
        self.city = input.city;
        self.state = input.state;
        self.zip = input.zip;
        self.nb_hood = input.nb_hood;
        self.country = input.country;
        self.price = input.price;
        self.property_type = input.property_type;
        self.contract = input.contract;
        self.beds = input.beds;
        self.baths = input.baths;
        self.square_mt = input.square_mt;
        self.lot_size = input.lot_size;
        self.year_built = input.year_built;
        self.status = input.status;
        self.lat = input.lat;
        self.lon = input.lon;
        self.features = input.features;
        self.featured = input.featured;
        self.featured_expires_at = input.featured_expires_at;
    }

    pub fn refresh_slug(&mut self) {
        let source = [
            self.contract.as_str(),
            self.address.as_str(),
            self.nb_hood.as_str(),
            self.zip.as_str(),
            self.city.as_str(),
            self.state.as_str(),
            &self.year_built.to_string(),
        ]
        .join(" ");

        self.slug = slugify(&source);
    }

    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.agent == Some(user_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PropertyPage {
    pub properties: Vec<Property>,
    pub pagination: Pagination,
}
