use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{common::pagination::PageRequest, storage::entities::UploadedFile};

use super::entities::PropertyStatus;

pub const FEATURED_LIMIT: u64 = 10;
pub const NEARBY_LIMIT: u64 = 10;

/// Sortable columns. Anything else falls back to the listing date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrderBy {
    #[default]
    ListingDate,
    Price,
    SquareMt,
    LotSize,
}

impl OrderBy {
    pub fn parse_lossy(value: &str) -> Self {
        match value {
            "price" => OrderBy::Price,
            "square_mt" => OrderBy::SquareMt,
            "lot_size" => OrderBy::LotSize,
            _ => OrderBy::ListingDate,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrderDirection {
    Asc,
    #[default]
    Desc,
}

impl OrderDirection {
    pub fn parse_lossy(value: &str) -> Self {
        if value.eq_ignore_ascii_case("asc") {
            OrderDirection::Asc
        } else {
            OrderDirection::Desc
        }
    }
}

/// A "within N meters of a point" restriction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Proximity {
    pub lat: f64,
    pub lon: f64,
    pub radius_meters: f64,
}

/// Optional predicates of a property search. `None` means unconstrained.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyFilter {
    pub ids: Vec<Uuid>,
    pub contract: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_sq_mt: Option<f64>,
    pub max_sq_mt: Option<f64>,
    pub min_lot_size: Option<f64>,
    pub max_lot_size: Option<f64>,
    pub min_year_built: Option<i32>,
    pub max_year_built: Option<i32>,
    pub beds: Option<i32>,
    pub baths: Option<i32>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub property_type: Option<String>,
    pub zip: Option<String>,
    pub nb_hood: Option<String>,
    pub status: Option<PropertyStatus>,
    pub featured: Option<bool>,
    pub near_lat: Option<f64>,
    pub near_lon: Option<f64>,
    pub within_meters: Option<f64>,
    pub text: Option<String>,
    pub order_by: OrderBy,
    pub order_direction: OrderDirection,
}

impl PropertyFilter {
    /// Only complete when all three of latitude, longitude and radius are present.
    pub fn proximity(&self) -> Option<Proximity> {
        match (self.near_lat, self.near_lon, self.within_meters) {
            (Some(lat), Some(lon), Some(radius_meters)) => Some(Proximity {
                lat,
                lon,
                radius_meters,
            }),
            _ => None,
        }
    }
}

/// A filter and the page requested, as decoded from query string pairs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertySearch {
    pub filter: PropertyFilter,
    pub page: PageRequest,
}

impl PropertySearch {
    /// Builds a search from raw query pairs.
    ///
    /// Unknown keys, blank values and values that fail to parse are skipped so the matching
    /// predicate is simply not applied. `ids` may repeat or hold a comma separated list.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut filter = PropertyFilter::default();
        let mut page = None;
        let mut per_page = None;

        for (key, value) in pairs {
            let value = value.as_ref().trim();
            if value.is_empty() {
                continue;
            }

            match key.as_ref() {
                "ids" => filter.ids.extend(
                    value
                        .split(',')
                        .filter_map(|id| Uuid::parse_str(id.trim()).ok()),
                ),
                "contract" => filter.contract = Some(value.to_string()),
                "city" => filter.city = Some(value.to_string()),
                "state" => filter.state = Some(value.to_string()),
                "zip" => filter.zip = Some(value.to_string()),
                "nbHood" => filter.nb_hood = Some(value.to_string()),
                "propType" => filter.property_type = Some(value.to_string()),
                "status" => filter.status = value.parse().ok(),
                "featured" => filter.featured = value.parse().ok(),
                "beds" => filter.beds = value.parse().ok(),
                "baths" => filter.baths = value.parse().ok(),
                "minPrice" => filter.min_price = finite(value),
                "maxPrice" => filter.max_price = finite(value),
                "minSqMt" => filter.min_sq_mt = finite(value),
                "maxSqMt" => filter.max_sq_mt = finite(value),
                "minLotSize" => filter.min_lot_size = finite(value),
                "maxLotSize" => filter.max_lot_size = finite(value),
                "minYearBuilt" => filter.min_year_built = value.parse().ok(),
                "maxYearBuilt" => filter.max_year_built = value.parse().ok(),
                "q" => filter.text = Some(value.to_string()),
                "nearLat" => filter.near_lat = finite(value),
                "nearLon" => filter.near_lon = finite(value),
                "withinMeters" => filter.within_meters = finite(value),
                "orderBy" => filter.order_by = OrderBy::parse_lossy(value),
                "orderDir" => filter.order_direction = OrderDirection::parse_lossy(value),
                "page" => page = value.parse().ok(),
                "perPage" => per_page = value.parse().ok(),
                _ => {}
            }
        }

        Self {
            filter,
            page: PageRequest::new(page, per_page),
        }
    }
}

/// Allowed radii for the "nearby listings" lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NearbyDistance {
    Close,
    #[default]
    Normal,
    Far,
}

impl NearbyDistance {
    /// Values other than 1000, 2000 or 5000 become the 2000m default.
    pub fn from_meters(meters: Option<i64>) -> Self {
        match meters {
            Some(1000) => NearbyDistance::Close,
            Some(5000) => NearbyDistance::Far,
            _ => NearbyDistance::Normal,
        }
    }

    pub fn meters(&self) -> f64 {
        match self {
            NearbyDistance::Close => 1000.0,
            NearbyDistance::Normal => 2000.0,
            NearbyDistance::Far => 5000.0,
        }
    }
}

/// Editable fields of a listing.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyInput {
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
    pub square_mt: f64,
    pub lot_size: f64,
    pub year_built: i32,
    pub status: PropertyStatus,
    pub lat: f64,
    pub lon: f64,
    pub features: serde_json::Value,
    pub featured: bool,
    pub featured_expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default)]
pub struct PropertyPicturesInput {
    pub pictures: Vec<UploadedFile>,
    pub main_picture: Option<UploadedFile>,
    pub delete_pictures: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PictureKind {
    Main,
    Gallery,
}

impl PictureKind {
    pub fn parse_lossy(value: &str) -> Self {
        if value == "main" {
            PictureKind::Main
        } else {
            PictureKind::Gallery
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePictureInput {
    pub img_name: String,
    pub kind: PictureKind,
}

/// Parses a float, rejecting `NaN` and the infinities.
fn finite(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_pairs_give_default_search() {
        let search = PropertySearch::from_pairs(Vec::<(String, String)>::new());

        assert_eq!(search.filter, PropertyFilter::default());
        assert_eq!(search.page, PageRequest::default());
        assert_eq!(search.filter.order_by, OrderBy::ListingDate);
        assert_eq!(search.filter.order_direction, OrderDirection::Desc);
    }

    #[test]
    fn test_malformed_values_are_ignored() {
        let search = PropertySearch::from_pairs([
            ("minPrice", "barato"),
            ("beds", "3.5"),
            ("featured", "maybe"),
            ("status", "desconocida"),
            ("city", "   "),
            ("perPage", "-4"),
            ("maxPrice", "900000"),
        ]);

        assert_eq!(search.filter.min_price, None);
        assert_eq!(search.filter.beds, None);
        assert_eq!(search.filter.featured, None);
        assert_eq!(search.filter.status, None);
        assert_eq!(search.filter.city, None);
        assert_eq!(search.filter.max_price, Some(900000.0));
        assert_eq!(search.page.per_page, 10);
    }

    #[test]
    fn test_non_finite_numbers_are_ignored() {
        let search = PropertySearch::from_pairs([
            ("minPrice", "NaN"),
            ("maxPrice", "inf"),
            ("minSqMt", "-infinity"),
            ("nearLat", "nan"),
            ("nearLon", "-100.3"),
            ("withinMeters", "1500"),
        ]);

        assert_eq!(search.filter.min_price, None);
        assert_eq!(search.filter.max_price, None);
        assert_eq!(search.filter.min_sq_mt, None);
        assert_eq!(search.filter.near_lat, None);
        assert_eq!(search.filter.proximity(), None);
    }

    #[test]
    fn test_huge_page_is_accepted() {
        let search =
            PropertySearch::from_pairs([("page", "9223372036854775807"), ("perPage", "100")]);

        assert_eq!(search.page.page, i64::MAX as u64);
        assert_eq!(search.page.offset(), i64::MAX as u64);
    }

    #[test]
    fn test_ids_repeat_and_split() {
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        let third = Uuid::new_v4();
        let joined = format!("{second},{third}");

        let search = PropertySearch::from_pairs([
            ("ids", first.to_string().as_str()),
            ("ids", joined.as_str()),
            ("ids", "not-a-uuid"),
        ]);

        assert_eq!(search.filter.ids, vec![first, second, third]);
    }

    #[test]
    fn test_ordering_keys() {
        let search = PropertySearch::from_pairs([("orderBy", "price"), ("orderDir", "asc")]);
        assert_eq!(search.filter.order_by, OrderBy::Price);
        assert_eq!(search.filter.order_direction, OrderDirection::Asc);

        let search =
            PropertySearch::from_pairs([("orderBy", "price; DROP TABLE x"), ("orderDir", "up")]);
        assert_eq!(search.filter.order_by, OrderBy::ListingDate);
        assert_eq!(search.filter.order_direction, OrderDirection::Desc);
    }

    #[test]
    fn test_proximity_needs_all_three_fields() {
        let complete = PropertySearch::from_pairs([
            ("nearLat", "25.6"),
            ("nearLon", "-100.3"),
            ("withinMeters", "1500"),
        ]);
        assert_eq!(
            complete.filter.proximity(),
            Some(Proximity {
                lat: 25.6,
                lon: -100.3,
                radius_meters: 1500.0
            })
        );

        for missing in ["nearLat", "nearLon", "withinMeters"] {
            let pairs = [
                ("nearLat", "25.6"),
                ("nearLon", "-100.3"),
                ("withinMeters", "1500"),
            ]
            .into_iter()
            .filter(|(key, _)| *key != missing);

            assert_eq!(PropertySearch::from_pairs(pairs).filter.proximity(), None);
        }
    }

    #[test]
    fn test_nearby_distance_allow_list() {
        assert_eq!(NearbyDistance::from_meters(Some(1000)).meters(), 1000.0);
        assert_eq!(NearbyDistance::from_meters(Some(5000)).meters(), 5000.0);
        assert_eq!(NearbyDistance::from_meters(Some(3000)).meters(), 2000.0);
        assert_eq!(NearbyDistance::from_meters(None).meters(), 2000.0);
    }
}
