use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sibra_core::domain::property::{
    entities::PropertyStatus,
    value_objects::{DeletePictureInput, PictureKind, PropertyInput},
};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PropertyValidator {
    #[validate(length(min = 1, message = "address is required"))]
    pub address: String,

    #[serde(default)]
    pub description: String,

    #[validate(length(min = 1, message = "city is required"))]
    pub city: String,

    #[validate(length(min = 1, message = "state is required"))]
    pub state: String,

    #[serde(default)]
    pub zip: String,

    #[serde(default)]
    pub nb_hood: String,

    #[serde(default)]
    pub country: String,

    #[validate(range(min = 0.0, message = "price cannot be negative"))]
    pub price: f64,

    #[serde(default)]
    pub property_type: String,

    #[validate(length(min = 1, message = "contract is required"))]
    pub contract: String,

    #[serde(default)]
    #[validate(range(min = 0))]
    pub beds: i32,

    #[serde(default)]
    #[validate(range(min = 0))]
    pub baths: i32,

    #[serde(default, rename = "sqMt")]
    pub square_mt: f64,

    #[serde(default)]
    pub lot_size: f64,

    #[serde(default)]
    pub year_built: i32,

    #[serde(default)]
    pub status: PropertyStatus,

    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub lon: f64,

    #[serde(default)]
    #[schema(value_type = Object)]
    pub features: serde_json::Value,

    #[serde(default)]
    pub featured: bool,

    #[serde(default)]
    pub featured_expires_at: Option<DateTime<Utc>>,
}

impl From<PropertyValidator> for PropertyInput {
    fn from(payload: PropertyValidator) -> Self {
        let features = match payload.features {
            serde_json::Value::Null => serde_json::Value::Object(Default::default()),
            features => features,
        };

        PropertyInput {
            address: payload.address,
            description: payload.description,
            city: payload.city,
            state: payload.state,
            zip: payload.zip,
            nb_hood: payload.nb_hood,
            country: payload.country,
            price: payload.price,
            property_type: payload.property_type,
            contract: payload.contract,
            beds: payload.beds,
            baths: payload.baths,
            square_mt: payload.square_mt,
            lot_size: payload.lot_size,
            year_built: payload.year_built,
            status: payload.status,
            lat: payload.lat,
            lon: payload.lon,
            features,
            featured: payload.featured,
            featured_expires_at: payload.featured_expires_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeletePictureValidator {
    #[validate(length(min = 1, message = "imgName is required"))]
    pub img_name: String,

    /// `main` clears the main picture, anything else targets the gallery.
    #[serde(default, rename = "type")]
    pub kind: String,
}

impl From<DeletePictureValidator> for DeletePictureInput {
    fn from(payload: DeletePictureValidator) -> Self {
        DeletePictureInput {
            img_name: payload.img_name,
            kind: PictureKind::parse_lossy(&payload.kind),
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct NearbyQuery {
    /// Radius in meters: 1000, 2000 or 5000.
    pub d: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct PropertySearchParams {
    pub ids: Option<String>,
    pub contract: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub nb_hood: Option<String>,
    pub prop_type: Option<String>,
    pub status: Option<String>,
    pub featured: Option<bool>,
    pub beds: Option<i32>,
    pub baths: Option<i32>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_sq_mt: Option<f64>,
    pub max_sq_mt: Option<f64>,
    pub min_lot_size: Option<f64>,
    pub max_lot_size: Option<f64>,
    pub min_year_built: Option<i32>,
    pub max_year_built: Option<i32>,
    /// Full text search over address, neighborhood, city and description.
    pub q: Option<String>,
    pub near_lat: Option<f64>,
    pub near_lon: Option<f64>,
    pub within_meters: Option<f64>,
    /// `price`, `square_mt`, `lot_size` or the listing date by default.
    pub order_by: Option<String>,
    pub order_dir: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}
